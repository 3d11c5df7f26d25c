//! Process wiring: collaborators and the stdio message bridge

use loan_origination::{
    CatalogSeed, CreateLoanApplication, InMemoryLoanApplicationRepository,
    InMemoryMerchantCatalog, InMemoryProductCatalog, SeedError, ServiceConfig,
    UuidLoanApplicationIdGenerator, infrastructure::messaging::MessageChannels,
};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

/// Seed the catalogs and assemble the use case with in-memory collaborators
///
/// # Errors
///
/// Returns [`SeedError`] if the configured catalog cannot be read or parsed.
pub fn build_use_case(config: &ServiceConfig) -> Result<CreateLoanApplication, SeedError> {
    let merchants = Arc::new(InMemoryMerchantCatalog::new());
    let products = Arc::new(InMemoryProductCatalog::new());

    match &config.catalog_path {
        Some(path) => {
            let loaded = CatalogSeed::from_path(path)?.apply(&merchants, &products);
            info!(
                path = %path.display(),
                merchants = merchants.merchant_count(),
                products = loaded,
                "catalog loaded"
            );
        }
        None => warn!("No catalog configured, every request will be refused as MerchantNotFound"),
    }

    Ok(CreateLoanApplication::new(
        Arc::new(UuidLoanApplicationIdGenerator::new()),
        merchants,
        products,
    )
    .with_repository(Arc::new(InMemoryLoanApplicationRepository::new())))
}

/// Forward each non-blank input line to the worker and write its reply as a line.
///
/// Returns when the input ends or the worker goes away.
pub async fn bridge_lines<R, W>(
    reader: R,
    mut writer: W,
    channels: MessageChannels,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let MessageChannels {
        requests,
        mut replies,
    } = channels;
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        if requests.send(line).await.is_err() {
            break;
        }
        let Some(reply) = replies.recv().await else {
            break;
        };
        writer.write_all(reply.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    debug!("Message bridge finished");
    Ok(())
}
