//! Local puzzle inputs

use crate::error::InputError;
use puzzle_solver::PuzzleId;
use std::fs;
use std::path::{Path, PathBuf};

/// Where puzzle input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// One file, used for the single selected puzzle
    File(PathBuf),
    /// Directory laid out as `{dir}/{year}_day{day:02}.txt`
    Dir(PathBuf),
}

impl InputSource {
    /// Path the input for `id` is read from
    pub fn path_for(&self, id: PuzzleId) -> PathBuf {
        match self {
            InputSource::File(path) => path.clone(),
            InputSource::Dir(dir) => dir.join(format!("{}_day{:02}.txt", id.year, id.day)),
        }
    }

    pub fn contains(&self, id: PuzzleId) -> bool {
        self.path_for(id).is_file()
    }

    pub fn read(&self, id: PuzzleId) -> Result<String, InputError> {
        let path = self.path_for(id);
        if !path.is_file() {
            return Err(InputError::Missing {
                id,
                path: path.display().to_string(),
            });
        }
        read_file(&path)
    }
}

fn read_file(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn test_dir_path_format() {
        let source = InputSource::Dir(PathBuf::from("inputs"));

        let path = source.path_for(PuzzleId::new(2023, 5));
        assert_eq!(path, Path::new("inputs").join("2023_day05.txt"));

        let path = source.path_for(PuzzleId::new(2023, 25));
        assert!(path.to_string_lossy().ends_with("2023_day25.txt"));
    }

    #[test]
    fn test_file_source_ignores_id() {
        let source = InputSource::File(PathBuf::from("almanac.txt"));

        assert_eq!(source.path_for(PuzzleId::new(2023, 5)), Path::new("almanac.txt"));
        assert_eq!(source.path_for(PuzzleId::new(2022, 1)), Path::new("almanac.txt"));
    }

    #[test]
    fn test_read_from_dir() {
        let temp = TempDir::new().unwrap();
        let source = InputSource::Dir(temp.path().to_path_buf());
        let id = PuzzleId::new(2023, 5);

        assert!(!source.contains(id));
        assert!(matches!(source.read(id), Err(InputError::Missing { .. })));

        fs::write(temp.path().join("2023_day05.txt"), "seeds: 1\n").unwrap();

        assert!(source.contains(id));
        assert_eq!(source.read(id).unwrap(), "seeds: 1\n");
    }

    #[test]
    fn test_directory_is_not_an_input() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("2023_day05.txt")).unwrap();
        let source = InputSource::Dir(temp.path().to_path_buf());

        assert!(!source.contains(PuzzleId::new(2023, 5)));
    }

    proptest! {
        #[test]
        fn prop_dir_paths_distinct_per_puzzle(
            a in (2015u16..2035, 1u8..=25),
            b in (2015u16..2035, 1u8..=25),
        ) {
            let source = InputSource::Dir(PathBuf::from("inputs"));
            let path_a = source.path_for(PuzzleId::new(a.0, a.1));
            let path_b = source.path_for(PuzzleId::new(b.0, b.1));

            prop_assert_eq!(a == b, path_a == path_b);
            prop_assert_eq!(path_a.parent(), Some(Path::new("inputs")));
        }
    }
}
