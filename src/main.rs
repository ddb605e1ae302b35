use anyhow::Result;

fn main() -> Result<()> {
    let code = folio::cli::run()?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
