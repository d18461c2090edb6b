pub mod cli;
pub mod constants;
pub mod display;
pub mod logfile;
pub mod paths;

use clap::Parser;
use cli::{Cli, Commands, ShowArgs};
use display::{ChannelOrder, Image};
use paths::Paths;
use std::fs;

pub use display::{show_image, DisplayError, DisplayOptions, ImageError, Surface};
pub use logfile::{log_to_file, LogError};

#[derive(Debug)]
pub enum AppError {
    Log(LogError),
    Display(DisplayError),
    Image(ImageError),
    Io(std::io::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Log(err) => write!(f, "{err}"),
            AppError::Display(err) => write!(f, "{err}"),
            AppError::Image(err) => write!(f, "{err}"),
            AppError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Log(err) => Some(err),
            AppError::Display(err) => Some(err),
            AppError::Image(err) => Some(err),
            AppError::Io(err) => Some(err),
        }
    }
}

pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let paths = Paths::resolve(cli.base_dir).map_err(AppError::Io)?;
    match cli.command {
        Commands::Log(args) => log_to_file(&paths, &args.message, args.file.as_deref())
            .map(|path| {
                println!("{}", path.display());
            })
            .map_err(AppError::Log),
        Commands::Paths => {
            println!("base: {}", paths.base_dir.display());
            println!("data: {}", paths.data_dir.display());
            println!("logs: {}", paths.logging_dir.display());
            println!("test: {}", paths.test_dir.display());
            Ok(())
        }
        Commands::Show(args) => show_raw(args),
    }
}

fn show_raw(args: ShowArgs) -> Result<(), AppError> {
    let data = fs::read(&args.file).map_err(AppError::Io)?;
    let order = if args.rgb {
        ChannelOrder::Rgb
    } else {
        ChannelOrder::Bgr
    };
    let image = Image::new(args.height, args.width, args.channels, data)
        .map_err(AppError::Image)?
        .with_order(order);
    let title = args.title.unwrap_or_else(|| {
        args.file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| args.file.display().to_string())
    });
    show_image(&image, &title).map_err(AppError::Display)
}
