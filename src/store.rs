//! Word stores: plain text files holding one normalized word per line.

use std::io::{BufRead as _, Write as _};

use crate::words::Trie;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("could not read word store {path:?}")]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write word store {path:?}")]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes every stored word to `path` in lexicographic order, replacing any
/// existing file.
///
/// The empty word has no line of its own and is skipped.
pub fn save(trie: &Trie, path: impl AsRef<std::path::Path>) -> Result<(), Error> {
    let path = path.as_ref();
    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_owned(),
        source,
    };

    let mut writer = std::io::BufWriter::new(std::fs::File::create(path).map_err(write_err)?);
    let mut count = 0;
    for word in trie.words() {
        if word.is_empty() {
            log::warn!(path = &*path.to_string_lossy(); "empty word cannot be stored, skipping it");
            continue;
        }
        writeln!(writer, "{word}").map_err(write_err)?;
        count += 1;
    }
    writer.flush().map_err(write_err)?;

    log::debug!(path = &*path.to_string_lossy(), words = count; "saved word store");
    Ok(())
}

/// Builds a fresh trie from the words in `path`.
///
/// A missing file is an empty store. Blank lines are skipped and every other
/// line is inserted as-is, so it goes through normalization; bytes that are
/// not valid UTF-8 are dropped along with the rest of the non-letters.
pub fn load(path: impl AsRef<std::path::Path>) -> Result<Trie, Error> {
    let path = path.as_ref();
    let read_err = |source: std::io::Error| Error::Read {
        path: path.to_owned(),
        source,
    };

    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::debug!(path = &*path.to_string_lossy(); "no word store yet, starting empty");
            return Ok(Trie::new());
        }
        Err(err) => return Err(read_err(err)),
    };

    let mut trie = Trie::new();
    // Lines are raw bytes; anything that is not valid UTF-8 decodes to a
    // replacement character, which normalization drops like any non-letter.
    for line in std::io::BufReader::new(file).split(b'\n') {
        let line = line.map_err(read_err)?;
        let line = String::from_utf8_lossy(&line);
        if line.trim().is_empty() {
            continue;
        }
        trie.insert(&line);
    }

    log::debug!(path = &*path.to_string_lossy(), words = trie.len(); "loaded word store");
    Ok(trie)
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};

    use super::*;

    const WORDS: [&str; 5] = ["apple", "app", "application", "bat", "batch"];
    const NON_WORDS: [&str; 5] = ["baton", "banana", "appl", "batt", "applicationa"];

    fn tmp_dir() -> tempdir::TempDir {
        tempdir::TempDir::new("wordtrie").expect("error creating temporary directory")
    }

    #[test]
    fn save_and_load() {
        let dir = tmp_dir();
        let path = dir.path().join("words.txt");
        let trie = WORDS.iter().collect::<Trie>();

        save(&trie, &path).unwrap();
        let loaded = load(&path).unwrap();

        for word in WORDS {
            assert!(loaded.contains(word), "{word} should be found in loaded trie");
        }
        for word in NON_WORDS {
            assert!(!loaded.contains(word), "{word} should not be found in loaded trie");
        }
        assert_eq!(loaded.len(), WORDS.len());
    }

    #[test]
    fn saved_file_is_one_word_per_line() {
        let dir = tmp_dir();
        let path = dir.path().join("words.txt");
        let trie = ["Hello-World", "batch", "app", "bat"]
            .into_iter()
            .collect::<Trie>();

        save(&trie, &path).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "app\nbat\nbatch\nhelloworld\n"
        );
    }

    #[test]
    fn save_overwrites() {
        let dir = tmp_dir();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "stale\nwords\nhere\n").unwrap();

        save(&["fresh"].into_iter().collect::<Trie>(), &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn save_skips_empty_word() {
        let dir = tmp_dir();
        let path = dir.path().join("words.txt");
        let trie = ["", "a"].into_iter().collect::<Trie>();
        assert!(trie.contains(""));

        save(&trie, &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\n");
        assert!(!load(&path).unwrap().contains(""));
    }

    #[test]
    fn save_to_missing_directory_fails() {
        let dir = tmp_dir();
        let path = dir.path().join("missing").join("words.txt");
        let trie = WORDS.iter().collect::<Trie>();

        let err = save(&trie, &path).unwrap_err();

        assert!(matches!(err, Error::Write { path: ref p, .. } if *p == path));
        assert_eq!(trie.len(), WORDS.len());
        assert!(WORDS.iter().all(|word| trie.contains(word)));
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tmp_dir();
        let trie = load(dir.path().join("nothing-here.txt")).unwrap();
        assert!(trie.is_empty());
    }

    #[test]
    fn load_empty_file_is_empty() {
        let dir = tmp_dir();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "").unwrap();

        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn load_skips_blank_lines_and_normalizes() {
        let dir = tmp_dir();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "  Apple \n\n   \nBAT\r\nhello-world").unwrap();

        let trie = load(&path).unwrap();

        assert_eq!(trie.words(), ["apple", "bat", "helloworld"]);
        assert!(!trie.root().is_end());
    }

    #[test]
    fn load_ignores_invalid_utf8() {
        let dir = tmp_dir();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, b"apple\ncaf\xe9\nbat\n").unwrap();

        let trie = load(&path).unwrap();

        assert_eq!(trie.words(), ["apple", "bat", "caf"]);
        assert!(!trie.root().is_end());
    }

    #[test]
    fn load_directory_fails() {
        let dir = tmp_dir();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }

    #[test]
    fn random_round_trip() {
        let mut rng = rand_xoshiro::Xoshiro256PlusPlus::seed_from_u64(42);
        let words = (0..500)
            .map(|_| {
                let len = rng.gen_range(1..12);
                (0..len)
                    .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
                    .collect::<String>()
            })
            .collect::<std::collections::BTreeSet<_>>();

        let dir = tmp_dir();
        let path = dir.path().join("words.txt");
        save(&words.iter().collect::<Trie>(), &path).unwrap();

        assert_eq!(
            load(&path).unwrap().words(),
            words.into_iter().collect::<Vec<_>>()
        );
    }
}
