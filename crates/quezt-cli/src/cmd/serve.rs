use super::load_site;
use quezt_server::AppState;
use std::path::Path;

pub fn run(root: &Path, port: Option<u16>) -> anyhow::Result<()> {
    let (config, store) = load_site(root)?;
    let port = port.unwrap_or(config.server.port);
    tracing::info!(
        posts = store.posts.len(),
        case_studies = store.case_studies.len(),
        "content loaded"
    );
    let state = AppState::new(store, config);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
        let actual_port = listener.local_addr()?.port();
        println!("Quezt site → http://localhost:{actual_port}  (PID {})", std::process::id());

        tokio::select! {
            res = quezt_server::serve_on(state, listener) => res,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                Ok(())
            }
        }
    })
}
