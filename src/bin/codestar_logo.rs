use codestar_logo::Result;

use codestar_logo::cli::{get_config, init_logging, run};

fn main() -> Result<()> {
    let config = get_config()?;
    init_logging(&config);
    run(config)?;

    Ok(())
}
