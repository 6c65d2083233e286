use mcp_product_server::catalog::Catalog;
use mcp_product_server::config::ServerConfig;
use mcp_product_server::logging::init_logger;
use mcp_product_server::server::McpServer;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("mcp-product-server: configuration error: {e}");
            std::process::exit(1);
        }
    };

    init_logger(config.log_format);

    let catalog = match Catalog::load(config.catalog_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("catalog load failed: {e}");
            std::process::exit(1);
        }
    };

    let source = match &config.catalog_path {
        Some(path) => path.display().to_string(),
        None => "builtin".to_string(),
    };
    tracing::info!(%source, products = catalog.products().len(), "catalog loaded");

    let mut server = McpServer::new(catalog);
    if let Err(e) = server.run().await {
        tracing::error!("fatal error: {e}");
        std::process::exit(1);
    }
}
