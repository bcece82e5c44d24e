use crate::{
    Result,
    config::Config,
    llm::{GenerateRequest, LlmClient, OllamaClient},
};
use std::io::Write;
use tracing::info;

/// Sends one request and writes the generated text, plus a newline, to `out`.
///
/// Nothing is written unless the reply parsed and carried a `response` field.
pub async fn generate_and_print<W: Write>(
    client: &dyn LlmClient,
    request: GenerateRequest,
    out: &mut W,
) -> Result<()> {
    let generated = client.generate(request).await?;

    writeln!(out, "{}", generated.response)?;
    out.flush()?;

    Ok(())
}

pub async fn run(config: Config) -> Result<()> {
    let client = OllamaClient::new();
    let request = GenerateRequest::from(&config.generation);

    info!(
        "Generating with model {} via {}",
        request.model,
        client.endpoint()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    generate_and_print(&client, request, &mut out).await
}
