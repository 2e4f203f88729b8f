use digishop_env::{AppContext, EnvLoader};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), digishop_env::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let ctx = AppContext::builder()
        .with_loader(
            EnvLoader::builder()
                .with_compiled()
                .with_file("demos/env.toml", false)
                .with_env("DIGISHOP"),
        )
        .build()?;

    let env = ctx.env();
    if env.api_url.is_empty() {
        println!("API URL: <unset>");
    } else {
        println!("API URL: {}", env.api_url);
    }

    Ok(())
}
