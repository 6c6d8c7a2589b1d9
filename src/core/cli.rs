use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CliPaths {
    pub data_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl CliPaths {
    pub fn from_env() -> Result<Self, String> {
        Self::from_args(std::env::args().skip(1))
    }

    /// Each recognized flag takes exactly one value.
    pub fn from_args<I>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = String>,
    {
        let mut paths = Self::defaults();
        while let Some(arg) = args.next() {
            let slot = match arg.as_str() {
                "--data" => &mut paths.data_path,
                "--logs" => &mut paths.logs_dir,
                _ => return Err(format!("Unknown argument: {arg}")),
            };
            *slot = args
                .next()
                .map(PathBuf::from)
                .ok_or_else(|| format!("Missing value for {arg}"))?;
        }
        Ok(paths)
    }

    fn defaults() -> Self {
        Self {
            data_path: PathBuf::from("roster.json"),
            logs_dir: PathBuf::from("logs"),
        }
    }
}
