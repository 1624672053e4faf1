// Thu Oct 15 2026 - Alex

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mugicpp")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Qt-flavoured C++ class generator and round-trip parser", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Generator configuration as JSON.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a class and render its header and source.
    Render(RenderArgs),
    /// Parse a class and print it back as a single class body.
    Inline(InlineArgs),
    /// Print the enum table of a file as JSON.
    Enums(EnumsArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    pub input: PathBuf,

    /// Directory receiving `<name>.h` and `<name>.cpp`; printed when absent.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Run clang-format over the written files.
    #[arg(long, requires = "output")]
    pub format: bool,
}

#[derive(Parser, Debug)]
pub struct InlineArgs {
    pub input: PathBuf,
}

#[derive(Parser, Debug)]
pub struct EnumsArgs {
    pub input: PathBuf,

    #[arg(short, long, default_value = "Qt")]
    pub namespace: String,
}

impl RenderArgs {
    pub fn validate(&self) -> Result<(), String> {
        if !self.input.exists() {
            return Err(format!("Input file does not exist: {:?}", self.input));
        }
        if let Some(dir) = &self.output {
            if !dir.is_dir() {
                return Err(format!("Output directory does not exist: {:?}", dir));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let args = Args::try_parse_from(["mugicpp", "render", "foo.h", "-o", "out", "--format"]).unwrap();
        match args.command {
            Command::Render(render) => {
                assert_eq!(render.input, PathBuf::from("foo.h"));
                assert_eq!(render.output, Some(PathBuf::from("out")));
                assert!(render.format);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_format_requires_output() {
        assert!(Args::try_parse_from(["mugicpp", "render", "foo.h", "--format"]).is_err());
    }

    #[test]
    fn test_enums_default_namespace() {
        let args = Args::try_parse_from(["mugicpp", "--log-level", "debug", "enums", "qt.h"]).unwrap();
        assert_eq!(args.log_level, "debug");
        match args.command {
            Command::Enums(enums) => assert_eq!(enums.namespace, "Qt"),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
