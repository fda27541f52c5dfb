//! A part whose footprint comes straight out of a vendor library.

use fanout_board::Board;
use fanout_core::{Cursor, PadSet};
use fanout_library::{Library, LibraryError, Package};
use fanout_route::River;

use crate::import::{import_package, ImportOptions};
use crate::{Part, PartError};

/// Wraps a library package so it can be placed like any built-in part.
///
/// Library parts carry no routing knowledge, so [`Part::escape`] always
/// fails; wire their pads by hand or swap in a dedicated part type.
#[derive(Debug, Clone)]
pub struct LibraryPart {
    package: Package,
    options: ImportOptions,
    family: char,
}

impl LibraryPart {
    /// Look up `name` in `library` and keep a copy of its footprint.
    pub fn from_library(
        library: &Library,
        name: &str,
        options: ImportOptions,
    ) -> Result<Self, LibraryError> {
        Ok(Self {
            package: library.package(name)?.clone(),
            options,
            family: 'J',
        })
    }

    /// Override the designator family, e.g. `'U'` for an IC footprint.
    pub fn with_family(mut self, family: char) -> Self {
        self.family = family;
        self
    }
}

impl Part for LibraryPart {
    fn family(&self) -> char {
        self.family
    }

    fn place(&self, anchor: Cursor, board: &mut Board) -> Result<PadSet, PartError> {
        let owner = board.allocate(self.family);
        import_package(&self.package, anchor, owner, self.options, board)
    }

    fn escape(&self, _pads: &PadSet, _board: &mut Board) -> Result<River, PartError> {
        Err(PartError::NoEscapeStrategy {
            part: self.package.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIBRARY_XML: &str = r#"
        <library>
          <packages>
            <package name="SENSE2">
              <wire x1="-2" y1="-1" x2="2" y2="-1" width="0.2" layer="21"/>
              <pad name="1" x="-1" y="0" drill="0.7" diameter="1.4"/>
              <pad name="2" x="1" y="0" drill="0.7" diameter="1.4"/>
            </package>
          </packages>
        </library>
    "#;

    #[test]
    fn placing_allocates_a_designator_per_instance() {
        let library = Library::parse(LIBRARY_XML).unwrap();
        let part = LibraryPart::from_library(&library, "SENSE2", ImportOptions::default()).unwrap();
        let mut board = Board::default();

        let first = part.place(Cursor::new(0.0, 0.0), &mut board).unwrap();
        let second = part.place(Cursor::new(5.0, 0.0), &mut board).unwrap();

        assert_eq!(first.owner().to_string(), "J1");
        assert_eq!(second.owner().to_string(), "J2");
        assert_eq!(first.len(), 2);
        assert_eq!(board.drills().len(), 4);
    }

    #[test]
    fn family_override_changes_the_designator() {
        let library = Library::parse(LIBRARY_XML).unwrap();
        let part = LibraryPart::from_library(&library, "SENSE2", ImportOptions::default())
            .unwrap()
            .with_family('U');
        let mut board = Board::default();
        let pads = part.place(Cursor::new(0.0, 0.0), &mut board).unwrap();
        assert_eq!(pads.owner().to_string(), "U1");
    }

    #[test]
    fn unknown_packages_are_reported_by_name() {
        let library = Library::parse(LIBRARY_XML).unwrap();
        let err = LibraryPart::from_library(&library, "SENSE4", ImportOptions::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "package \"SENSE4\" not found in library");
    }

    #[test]
    fn escape_is_refused() {
        let library = Library::parse(LIBRARY_XML).unwrap();
        let part = LibraryPart::from_library(&library, "SENSE2", ImportOptions::default()).unwrap();
        let mut board = Board::default();
        let pads = part.place(Cursor::new(0.0, 0.0), &mut board).unwrap();
        let err = part.escape(&pads, &mut board).unwrap_err();
        assert!(matches!(err, PartError::NoEscapeStrategy { ref part } if part == "SENSE2"));
    }
}
