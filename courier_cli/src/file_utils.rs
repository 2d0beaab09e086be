use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use courier_planner::form::form_state::{FormState, FormValues};
use serde::{Serialize, de::DeserializeOwned};

pub fn read_json<T>(path: &Path) -> Result<T, anyhow::Error>
where
    T: DeserializeOwned,
{
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Cannot parse {}", path.display()))?;

    Ok(value)
}

pub fn read_form(path: &Path) -> Result<FormState, anyhow::Error> {
    let values: FormValues = read_json(path)?;
    let form = FormState::from_values(values)?;

    Ok(form)
}

/// Pretty JSON into `output`, or stdout when no file is given.
pub fn write_json<T>(output: Option<&PathBuf>, value: &T) -> Result<(), anyhow::Error>
where
    T: Serialize + ?Sized,
{
    match output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, value)?;
            writeln!(writer)?;
        }
    }

    Ok(())
}
