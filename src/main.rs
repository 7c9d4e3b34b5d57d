use anyhow::Context as _;
use clap::Parser as _;

#[derive(clap::Subcommand)]
enum Command {
    /// Add words to the store
    Insert {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Report whether each word is stored
    Search {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Remove words from the store
    Delete {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Print every stored word
    List,
}

#[derive(clap::Parser)]
#[command(version, about = "Keep a word list in a prefix tree")]
struct Args {
    /// Word store, one word per line
    #[arg(long, global = true, env = "WORDTRIE_STORE", default_value = "words.txt")]
    store: std::path::PathBuf,

    /// Log more; repeat for more detail
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .parse_default_env()
        .init();

    let mut trie = wordtrie::store::load(&args.store)
        .with_context(|| format!("error loading {}", args.store.display()))?;

    log::info!(store = &*args.store.to_string_lossy(), words = trie.len(); "wordtrie");

    match args.command {
        Command::Insert { words } => {
            for word in &words {
                let normalized = wordtrie::normalize(word);
                let added = trie.insert(word);
                wordtrie::debug_check!(
                    trie.contains(word),
                    log::Level::Error,
                    "inserted word {:?} is not found",
                    normalized
                );
                println!("{} {normalized}", if added { "added" } else { "exists" });
            }
            save(&trie, &args.store)?;
        }
        Command::Search { words } => {
            for word in &words {
                let found = trie.contains(word);
                println!(
                    "{}\t{}",
                    wordtrie::normalize(word),
                    if found { "found" } else { "missing" }
                );
            }
        }
        Command::Delete { words } => {
            for word in &words {
                let normalized = wordtrie::normalize(word);
                let removed = trie.remove(word);
                wordtrie::debug_check!(
                    !trie.contains(word),
                    log::Level::Error,
                    "deleted word {:?} is still found",
                    normalized
                );
                println!("{} {normalized}", if removed { "deleted" } else { "missing" });
            }
            save(&trie, &args.store)?;
        }
        Command::List => {
            for word in trie.words() {
                println!("{word}");
            }
        }
    }

    Ok(())
}

fn save(trie: &wordtrie::Trie, path: &std::path::Path) -> anyhow::Result<()> {
    wordtrie::store::save(trie, path)
        .with_context(|| format!("error saving {}", path.display()))?;
    log::info!(store = &*path.to_string_lossy(), words = trie.len(); "saved");
    Ok(())
}
