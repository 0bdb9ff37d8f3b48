//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, GenerateArgs};
use crate::config::{load_config, FileConfig, InferenceConfig, OutputConfig};
use crate::error::{Error, Result};
use crate::infer::Inference;
use crate::output::{read_json_file, write_generated, WriterConfig};
use crate::render::Language;
use crate::watch::watch_file;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Fully resolved generation settings (CLI flags over config file values)
struct Settings {
    language: Language,
    inference: InferenceConfig,
    output: OutputConfig,
    dry_run: bool,
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Generate(args) => self.generate(args),
            Commands::Watch(args) => self.watch(args),
            Commands::Languages => self.languages(),
            Commands::Validate { input } => self.validate(input),
        }
    }

    /// Load the config file, or defaults when none was given
    fn load_file_config(&self) -> Result<FileConfig> {
        match &self.cli.config {
            Some(path) => load_config(path),
            None => Ok(FileConfig::default()),
        }
    }

    /// Merge CLI flags over config file values over defaults
    fn resolve(&self, args: &GenerateArgs) -> Result<Settings> {
        let file = self.load_file_config()?;

        let language = args.lang.or(file.language).ok_or_else(|| {
            Error::config("Target language not specified (use --lang or the config file)")
        })?;

        let mut inference = file.inference;
        if let Some(sample) = args.sample {
            if sample == 0 {
                return Err(Error::invalid_value("sample", "must be at least 1"));
            }
            inference.sample_size = sample;
        }
        if args.nullable {
            inference.nullable = true;
        }
        if args.strict {
            inference.strict = true;
        }
        if let Some(depth) = args.max_depth {
            inference.max_depth = depth;
        }

        let mut output = file.output;
        if args.backup {
            output.backup = true;
        }
        if let Some(delimiter) = &args.delimiter {
            output.delimiter = delimiter.clone();
        }
        if let Some(root_name) = &args.root_name {
            output.root_name = root_name.clone();
        }

        Ok(Settings {
            language,
            inference,
            output,
            dry_run: args.dry_run,
        })
    }

    /// Generate types once
    fn generate(&self, args: &GenerateArgs) -> Result<()> {
        let settings = self.resolve(args)?;
        self.generate_with(args, &settings)
    }

    /// One read → infer → render → write cycle
    fn generate_with(&self, args: &GenerateArgs, settings: &Settings) -> Result<()> {
        info!("reading JSON file: {}", args.input.display());
        let document = read_json_file(&args.input)?;

        info!("analyzing JSON structure");
        let inferrer = settings.inference.to_inferrer();
        let Inference { root, registry } =
            inferrer.infer_document(&document, &settings.output.root_name);

        if registry.collisions() > 0 {
            warn!(
                "{} type name collision(s); later shapes overwrote earlier ones",
                registry.collisions()
            );
        }

        info!("generating {} types", settings.language.title());
        let generator = settings.language.generator();
        let code = generator.generate(&root, &registry);

        let output_path = args.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!("types.generated.{}", generator.file_extension()))
        });

        let writer_config = WriterConfig::new()
            .with_delimiter(settings.output.delimiter.clone())
            .with_backup(settings.output.backup)
            .with_dry_run(settings.dry_run);

        write_generated(&output_path, &code, &writer_config)?;

        if !settings.dry_run {
            info!(
                "generated {} declarations into {}",
                settings.language.title(),
                output_path.display()
            );
        }

        Ok(())
    }

    /// Watch the input file and regenerate on change
    fn watch(&self, args: &GenerateArgs) -> Result<()> {
        let settings = self.resolve(args)?;

        // One generation up front so the output exists before the first change
        self.generate_with(args, &settings)?;

        watch_file(&args.input, || self.generate_with(args, &settings))
    }

    /// List target languages with their extension and comment prefix
    fn languages(&self) -> Result<()> {
        for language in Language::all() {
            let generator = language.generator();
            println!(
                "{:<12} {:<20} .{:<6} {}",
                language.name(),
                language.title(),
                generator.file_extension(),
                generator.comment_prefix()
            );
        }
        Ok(())
    }

    /// Validate that the input parses as JSON
    fn validate(&self, input: &Path) -> Result<()> {
        read_json_file(input)?;
        println!("{} is valid JSON", input.display());
        Ok(())
    }
}
