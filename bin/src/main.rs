use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_spelling_bee_solver::*;
use std::error::Error;
use std::fs;
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

const RED: &str = "\x1b[0;31m";
const GREEN: &str = "\x1b[0;32m";
const PURPLE: &str = "\x1b[0;35m";
const NO_COLOR: &str = "\x1b[0m";

/// The number of random puzzles to try before giving up on finding a playable one.
const MAX_PUZZLE_ATTEMPTS: usize = 10_000;

/// Solves Spelling Bee puzzles, generates puzzle banks, and plays the game in the terminal.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: PathBuf,

    /// The minimum number of letters in a valid word.
    #[clap(short = 'm', long, default_value_t = MIN_WORD_LENGTH)]
    min_length: usize,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every word that can be made from the given letters. The first letter is the base
    /// letter.
    Solve { letters: String },
    /// Solve every puzzle that has a pangram, and write them to easy.json, medium.json, and
    /// hard.json, grouped by difficulty.
    Generate {
        /// Directory to write the puzzle files to.
        #[clap(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Play an interactive game.
    Play {
        /// The letters to play with. A random playable puzzle is chosen if not given.
        #[clap(short, long)]
        letters: Option<String>,
        /// Seed for choosing puzzles and hints.
        #[clap(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let start_time = Instant::now();
    let args = Args::parse();
    info!("File: {}", args.words_file.display());

    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let index = WordIndex::from_reader(words_reader)?;
    info!(
        "There are {} possible words with {} distinct letter sets.",
        index.len(),
        index.num_keys()
    );
    let matcher = Matcher::with_min_word_length(&index, args.min_length);

    match args.command {
        Command::Solve { letters } => print_solution(&matcher, &letters)?,
        Command::Generate { out_dir } => generate_puzzles(&matcher, &out_dir)?,
        Command::Play { letters, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            play_game(&matcher, letters.as_deref(), &mut rng)?
        }
    }

    info!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn print_solution(matcher: &Matcher, letters: &str) -> Result<(), SpellingBeeError> {
    let solution = matcher.solve_letters(letters)?;
    println!(
        "Found {} words for {}:",
        solution.len(),
        solution.puzzle().letters().to_uppercase()
    );
    for word in solution.sorted_words() {
        if solution.is_pangram(&word) {
            println!("\t{} (pangram)", word);
        } else {
            println!("\t{}", word);
        }
    }
    Ok(())
}

fn generate_puzzles(matcher: &Matcher, out_dir: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(out_dir)?;
    let bank = PuzzleBank::generate(matcher);
    for difficulty in Difficulty::ALL {
        let puzzles = bank.puzzles(difficulty);
        let path = out_dir.join(format!("{}.json", difficulty));
        let writer = io::BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(writer, puzzles)?;
        println!("{}: {}", difficulty, puzzles.len());
    }
    Ok(())
}

fn play_game(
    matcher: &Matcher,
    letters: Option<&str>,
    rng: &mut StdRng,
) -> Result<(), Box<dyn Error>> {
    println!("Rules:");
    println!("  1. All words must include the base letter. This is given as the first letter.");
    println!(
        "  2. Words must be at least {} letters in length.",
        matcher.min_word_length()
    );
    println!("  3. All solutions include a pangram containing all of the letters.");

    let solution = match letters {
        Some(letters) => matcher.solve_letters(letters)?,
        None => random_playable_puzzle(matcher, rng, MAX_PUZZLE_ATTEMPTS)
            .ok_or("no playable puzzles in the word list")?,
    };
    let mut game = Game::with_min_word_length(solution, matcher.min_word_length());
    let letters = game.puzzle().letters().to_uppercase();
    let base_letter = game.puzzle().base_letter().to_ascii_uppercase();

    while !game.is_solved() {
        println!();
        if game.num_found() > 0 {
            let found: Vec<&str> = game.found().iter().map(|word| word.as_ref()).collect();
            println!("{}", found.join(", "));
        }
        println!(
            "Your letters are: {}",
            letters
                .chars()
                .map(String::from)
                .collect::<Vec<String>>()
                .join(" ")
        );
        print!(
            "[{}] ({}/{}) Enter your guess (or \"q\" to quit, \"h\" for a hint): ",
            letters,
            game.num_found(),
            game.num_words()
        );
        io::stdout().flush()?;

        let mut buffer = String::new();
        if io::stdin().read_line(&mut buffer)? == 0 {
            break;
        }
        let guess = buffer.trim().to_lowercase();
        match guess.as_str() {
            "q" => break,
            "h" => {
                if let Some(hint) = game.hint(rng) {
                    println!("[{}] {}Hint: {}{}", letters, PURPLE, hint, NO_COLOR);
                }
                continue;
            }
            _ => {}
        }

        let (color, message) = match game.guess(&guess) {
            GuessOutcome::Pangram => (GREEN, "PANGRAM!!".to_string()),
            GuessOutcome::Correct => (GREEN, "Correct!".to_string()),
            GuessOutcome::AlreadyFound => (RED, "Already guessed".to_string()),
            GuessOutcome::TooShort => (
                RED,
                format!(
                    "Words must be at least {} letters",
                    matcher.min_word_length()
                ),
            ),
            GuessOutcome::MissingBaseLetter => (
                RED,
                format!("Guess does not contain the base letter ({})", base_letter),
            ),
            GuessOutcome::Unrecognized => (RED, "Unrecognized guess".to_string()),
        };
        println!("[{}] {}{}{}", letters, color, message, NO_COLOR);
    }

    println!(
        "Score: {} of {} points.",
        game.score(),
        game.max_score()
    );
    if game.is_solved() {
        println!("{}YOU WIN!{}", GREEN, NO_COLOR);
    } else {
        println!("{}Game over{}", RED, NO_COLOR);
        println!("The words were: {}", game.solution().sorted_words().join(", "));
    }

    Ok(())
}
