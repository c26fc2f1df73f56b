use std::fs;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use flagquest_core::{Catalog, FlagStore};

/// Everything the country data provider serves
pub struct GameData {
    pub catalog: Catalog,
    pub flags: FlagStore,
}

/// Read and parse both data files from the data directory
pub fn load(dir: &Path) -> Result<GameData> {
    let path = dir.join("countries.json");
    let raw =
        fs::read_to_string(&path).wrap_err_with(|| format!("reading {}", path.display()))?;
    let catalog =
        Catalog::from_json_str(&raw).wrap_err_with(|| format!("parsing {}", path.display()))?;

    let path = dir.join("flags.json");
    let raw =
        fs::read_to_string(&path).wrap_err_with(|| format!("reading {}", path.display()))?;
    let flags =
        FlagStore::from_json_str(&raw).wrap_err_with(|| format!("parsing {}", path.display()))?;

    Ok(GameData { catalog, flags })
}
