//! The folder/placemark annotation tree.

use super::Geometry;

/// A named single-geometry annotation from the source document.
#[derive(Debug, Clone, PartialEq)]
pub struct Placemark {
    pub name: String,
    pub geometry: Geometry,
}

/// A named grouping of placemarks and nested folders.
///
/// Strict ownership tree: a folder exclusively owns its children, built
/// bottom-up in one pass and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Folder {
    pub name: String,
    pub folders: Vec<Folder>,
    pub placemarks: Vec<Placemark>,
}

impl Folder {
    /// Total number of placemarks in this folder and all nested folders.
    pub fn placemark_count(&self) -> usize {
        self.placemarks.len()
            + self
                .folders
                .iter()
                .map(Folder::placemark_count)
                .sum::<usize>()
    }

    /// The whole subtree as a flat folder sequence, depth-first pre-order
    /// (self first). This is the sequence the exporter walks so that every
    /// placemark in the tree gets visited exactly once.
    pub fn flatten(&self) -> Vec<&Folder> {
        let mut out = vec![self];
        for child in &self.folders {
            out.extend(child.flatten());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::Point;

    fn placemark(name: &str) -> Placemark {
        Placemark {
            name: name.to_string(),
            geometry: Geometry::Point(Point::new(0.0, 0.0)),
        }
    }

    fn tree() -> Folder {
        Folder {
            name: "root".to_string(),
            folders: vec![
                Folder {
                    name: "a".to_string(),
                    folders: vec![Folder {
                        name: "a1".to_string(),
                        folders: vec![],
                        placemarks: vec![placemark("p2")],
                    }],
                    placemarks: vec![placemark("p1")],
                },
                Folder {
                    name: "b".to_string(),
                    folders: vec![],
                    placemarks: vec![placemark("p3"), placemark("p4")],
                },
            ],
            placemarks: vec![placemark("p0")],
        }
    }

    #[test]
    fn test_placemark_count_recurses() {
        assert_eq!(tree().placemark_count(), 5);
    }

    #[test]
    fn test_flatten_is_preorder() {
        let root = tree();
        let names: Vec<&str> = root.flatten().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["root", "a", "a1", "b"]);
    }
}
