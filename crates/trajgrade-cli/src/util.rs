use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use trajgrade_engine::{ScenarioConfig, Trajectory};
use trajgrade_evaluator::ScoreParams;

use crate::schema::scene_file::SceneFile;

/// Destination for JSON output: stdout or a file
#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    /// Writes `value` as pretty JSON to `output_path`, or to stdout if `None`
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = match output_path {
            Some(path) => Output::create(path)?,
            None => Output::Stdout {
                writer: io::stdout().lock(),
            },
        };
        output.write_json(value)?;
        if let Output::File { path, .. } = &output {
            eprintln!("Saved to {}", path.display());
        }
        Ok(())
    }

    fn create(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self)
            .with_context(|| format!("Failed to write newline to {}", self.display_path()))?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read a scene file written by `generate-scene`
///
/// # Errors
///
/// Returns error if file cannot be opened or parsed, or the scene is invalid
pub fn read_scene_file<P>(path: P) -> anyhow::Result<SceneFile>
where
    P: AsRef<Path>,
{
    read_json_file("scene", path)
}

/// Read a trajectory given as a JSON list of `[x, y]` pairs
///
/// # Errors
///
/// Returns error if file cannot be opened or parsed, or the list is empty
pub fn read_trajectory_file<P>(path: P) -> anyhow::Result<Trajectory>
where
    P: AsRef<Path>,
{
    read_json_file("trajectory", path)
}

/// Read scenario config; missing fields take their default values
pub fn read_scenario_config_file<P>(path: P) -> anyhow::Result<ScenarioConfig>
where
    P: AsRef<Path>,
{
    read_json_file("scenario config", path)
}

/// Read score parameters; missing fields take their default values
pub fn read_score_params_file<P>(path: P) -> anyhow::Result<ScoreParams>
where
    P: AsRef<Path>,
{
    read_json_file("score params", path)
}
