use super::error::GraphError;
use bevy::math::Vec2;
use serde::Deserialize;

const DODECAHEDRON_JSON: &str = include_str!("../../assets/dodecahedron.json");

/// Board data table: where each vertex sits and which pairs are joined.
///
/// Coordinates are in board units (the outer ring has radius 1) and only
/// matter to presentation. Vertex `i` is the `i`-th entry of `vertices`.
#[derive(Debug, Clone, Deserialize)]
pub struct Layout {
    pub name: String,
    vertices: Vec<[f32; 2]>,
    edges: Vec<[usize; 2]>,
}

impl Layout {
    /// The canonical 0-based dodecahedron projection embedded in the binary
    pub fn dodecahedron() -> Result<Self, GraphError> {
        Self::parse(DODECAHEDRON_JSON)
    }

    pub fn parse(json: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.vertices.iter().map(|&[x, y]| Vec2::new(x, y))
    }

    /// Raw endpoint pairs, unvalidated
    pub fn edge_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().map(|&[a, b]| (a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_layout_parses() {
        let layout = Layout::dodecahedron().unwrap();

        assert_eq!(layout.name, "dodecahedron");
        assert_eq!(layout.vertex_count(), 20);
        assert_eq!(layout.edge_pairs().count(), 30);
    }

    #[test]
    fn test_embedded_positions_are_unique() {
        let layout = Layout::dodecahedron().unwrap();
        let positions: Vec<Vec2> = layout.positions().collect();

        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                assert!(a.distance(*b) > 0.1, "vertices {a} and {b} overlap");
            }
        }
    }

    #[test]
    fn test_parse_small_table() {
        let json = r#"{"name":"tri","vertices":[[0,0],[1,0],[0,1]],"edges":[[0,1],[1,2],[2,0]]}"#;
        let layout = Layout::parse(json).unwrap();

        assert_eq!(layout.vertex_count(), 3);
        assert_eq!(layout.positions().nth(1), Some(Vec2::new(1.0, 0.0)));
        assert_eq!(layout.edge_pairs().last(), Some((2, 0)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Layout::parse(r#"{"name":"broken","vertices":[[0,0]]"#),
            Err(GraphError::Layout(_))
        ));

        // Negative indices can't be vertices
        assert!(matches!(
            Layout::parse(r#"{"name":"neg","vertices":[[0,0]],"edges":[[-1,0]]}"#),
            Err(GraphError::Layout(_))
        ));
    }
}
