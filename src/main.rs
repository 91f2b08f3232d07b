use anyhow::Result;

fn main() -> Result<()> {
    wordriddle::cli::run_cli()
}
