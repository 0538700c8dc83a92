use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("sysdash version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
