// Thu Oct 15 2026 - Alex

use super::args::{Args, Command, EnumsArgs, InlineArgs, RenderArgs};
use crate::config::{FormatStyle, GeneratorConfig};
use crate::output::{write_class, ClangFormat};
use crate::parser::{parse_class, parse_enum_blocks};
use crate::render::{declaration, implementation, inline_class};
use crate::utils::logging::{init_logger, level_from_str};
use anyhow::Context;
use colored::Colorize;
use log::info;
use std::fs;
use std::path::Path;

pub struct CommandHandler {
    config: GeneratorConfig,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn execute(mut self, args: Args) -> anyhow::Result<()> {
        if args.no_color {
            colored::control::set_override(false);
        }
        init_logger(level_from_str(&args.log_level));

        if let Some(path) = &args.config {
            self.config = GeneratorConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config {:?}", path))?;
            info!("Loaded config {:?}", path);
        }

        match args.command {
            Command::Render(render_args) => self.handle_render(render_args),
            Command::Inline(inline_args) => self.handle_inline(inline_args),
            Command::Enums(enums_args) => self.handle_enums(enums_args),
        }
    }

    fn read(path: &Path) -> anyhow::Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))
    }

    fn handle_render(&self, args: RenderArgs) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let text = Self::read(&args.input)?;
        let class = parse_class(&text, &self.config)?;

        let Some(dir) = &args.output else {
            println!("{}", declaration(&class));
            println!("{}", implementation(&class));
            return Ok(());
        };

        let unit = write_class(&class, dir)?;
        println!(
            "{}",
            format!("Wrote {} and {}", unit.header.display(), unit.source.display()).green()
        );

        if args.format {
            let formatter = ClangFormat::new(FormatStyle::default());
            let handle = formatter.spawn(&unit.paths(), None);
            if !handle.join().unwrap_or(false) {
                println!("{}", "clang-format did not complete, files left unformatted".yellow());
            }
        }
        Ok(())
    }

    fn handle_inline(&self, args: InlineArgs) -> anyhow::Result<()> {
        let text = Self::read(&args.input)?;
        let class = parse_class(&text, &self.config)?;
        print!("{}", inline_class(&class));
        Ok(())
    }

    fn handle_enums(&self, args: EnumsArgs) -> anyhow::Result<()> {
        let text = Self::read(&args.input)?;
        let table = parse_enum_blocks(&args.namespace, &text)?;
        println!("{}", serde_json::to_string_pretty(&table)?);
        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
