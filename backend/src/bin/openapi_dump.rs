//! Print the OpenAPI document as JSON.

use color_eyre::eyre::{Context, Result};
use utoipa::OpenApi;
use wordbook::doc::ApiDoc;

fn main() -> Result<()> {
    color_eyre::install()?;
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .wrap_err("failed to serialise OpenAPI document")?;
    println!("{json}");
    Ok(())
}
