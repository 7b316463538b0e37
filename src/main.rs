use aimgen::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "aimgen")]
#[command(version)]
#[command(
    about = "Scaffold AIM solver sources and register them with the CMake build",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a class triplet (.hpp/.cpp/.tpp) plus its CMake registration
    #[clap(visible_alias = "cc")]
    CreateClass {
        /// Folder name in camelCase, e.g. parameterNodeManager
        folder: String,
        /// Class name in camelCase; may equal the folder name (the folder name wins by convention)
        class: String,
        /// Group name in PascalCase (a new group also needs an entry in src/groupDefinitions.hpp)
        group: String,
    },
    /// Scaffold a GoogleTest suite for a folder plus its CMake registration
    #[clap(visible_alias = "ct")]
    CreateTest {
        /// Folder name in camelCase, e.g. parameterNodeManager
        folder: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::CreateClass { folder, class, group } => {
            aimgen::create_class(&folder, &class, &group).map(|_| ())
        }
        Commands::CreateTest { folder } => aimgen::create_test(&folder).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
