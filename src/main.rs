use std::{
    path::PathBuf,
    process::ExitCode,
};

use clap::{
    Parser,
    Subcommand,
};
use hanja_sheets::{
    hanja::{
        CharDictionary,
        CompoundTable,
    },
    SheetAssembler,
    SheetError,
    SheetSettings,
    VocabularyDb,
    WorksheetKind,
};

#[derive(Parser)]
#[command(name = "hanja_sheets", about = "Vocabulary worksheet and quiz generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a worksheet and print it as JSON
    Generate {
        /// meaning, sentence, hanja or quiz
        kind: WorksheetKind,
        /// Vocabulary file (JSON array of entries)
        #[arg(long)]
        vocab: PathBuf,
        /// Character dictionary (JSON object: character -> [{kor, def}])
        #[arg(long)]
        dict: Option<PathBuf>,
        /// Compound words (JSON object: character -> [word])
        #[arg(long)]
        compounds: Option<PathBuf>,
        /// Comma-separated entry ids, in sheet order
        #[arg(long, value_delimiter = ',')]
        ids: Vec<String>,
        /// Use every entry of this grade
        #[arg(long, conflicts_with = "ids")]
        grade: Option<u32>,
        /// Settings file (defaults to the per-user settings)
        #[arg(long)]
        settings: Option<PathBuf>,
    },

    /// List hanja words per grade
    Grades {
        /// Vocabulary file (JSON array of entries)
        #[arg(long)]
        vocab: PathBuf,
    },

    /// Print the effective settings as JSON
    Settings {
        /// Write them to the per-user settings file, creating it if missing
        #[arg(long)]
        save: bool,
    },
}

fn generate(
    kind: WorksheetKind,
    vocab: PathBuf,
    dict: Option<PathBuf>,
    compounds: Option<PathBuf>,
    ids: Vec<String>,
    grade: Option<u32>,
    settings: Option<PathBuf>,
) -> Result<(), SheetError> {
    let settings = match settings {
        Some(path) => SheetSettings::load_from(&path),
        None => SheetSettings::load(),
    };
    let db = VocabularyDb::load(&vocab)?;
    let dictionary = dict.map(|path| CharDictionary::load(&path)).transpose()?;
    let compounds = compounds.map(|path| CompoundTable::load(&path)).transpose()?;

    let entries = match grade {
        Some(grade) => db.by_grade(grade),
        None if ids.is_empty() => db.entries().to_vec(),
        None => db.select(&ids)?,
    };
    if entries.is_empty() {
        log::warn!("No vocabulary entries selected, the worksheet will be empty");
    }

    let mut assembler = SheetAssembler::new(&settings).with_vocabulary(db.entries());
    if let Some(dictionary) = &dictionary {
        assembler = assembler.with_dictionary(dictionary);
    }
    if let Some(compounds) = &compounds {
        assembler = assembler.with_compounds(compounds);
    }

    let worksheet = assembler.generate(kind, &entries);
    println!("{}", serde_json::to_string_pretty(&worksheet)?);
    Ok(())
}

fn grades(vocab: PathBuf) -> Result<(), SheetError> {
    let db = VocabularyDb::load(&vocab)?;
    for (grade, words) in db.hanja_by_grade() {
        println!("\n### Grade {} ({})", grade, words.len());
        println!("{}", words.join(", "));
    }
    Ok(())
}

fn settings(save: bool) -> Result<(), SheetError> {
    let settings = SheetSettings::load();
    if save {
        settings.save()?;
    }
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Generate { kind, vocab, dict, compounds, ids, grade, settings } => {
            generate(kind, vocab, dict, compounds, ids, grade, settings)
        }
        Command::Grades { vocab } => grades(vocab),
        Command::Settings { save } => settings(save),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
