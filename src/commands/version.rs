use std::fmt;

/// Build metadata printed by the `version` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub commit: Option<&'static str>,
    pub os: &'static str,
    pub arch: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        BuildInfo {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            commit: option_env!("CREEPYMATRIX_GIT_COMMIT").filter(|commit| !commit.is_empty()),
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)?;
        if let Some(commit) = self.commit {
            write!(f, " ({})", commit)?;
        }
        write!(f, " {}/{}", self.os, self.arch)
    }
}

pub fn print_version(writer: &mut dyn std::io::Write) -> anyhow::Result<()> {
    writeln!(writer, "{}", BuildInfo::current())?;

    Ok(())
}
