//! Tests for vertex mesh construction and boundary classification

#[cfg(test)]
mod tests {
    use crate::fixtures::{enclosed_wrap, wrapped_square};
    use ndarray::{Array2, array};
    use vertexstats::AnalysisError;
    use vertexstats::topology::honeycomb::HoneycombGenerator;
    use vertexstats::topology::mesh::VertexMesh;
    use vertexstats::topology::view::PolygonTopologyView;

    /// Two unit squares side by side, sharing the edge (1, 4)
    fn two_squares() -> Array2<f64> {
        array![
            [0.0, 0.0],
            [1.0, 0.0],
            [2.0, 0.0],
            [0.0, 1.0],
            [1.0, 1.0],
            [2.0, 1.0]
        ]
    }

    // Tests incidence lists and shared edge detection
    // Verified by recording incidence before reorientation
    #[test]
    fn test_incidence_and_shared_edges() {
        let mesh = VertexMesh::new(two_squares(), vec![vec![0, 1, 4, 3], vec![1, 2, 5, 4]])
            .expect("valid mesh");

        assert_eq!(mesh.num_nodes(), 6);
        assert_eq!(mesh.cells_containing_vertex(1), &[0, 1]);
        assert_eq!(mesh.cells_containing_vertex(0), &[0]);
        assert_eq!(mesh.cells_sharing_edge(1, 4), vec![0, 1]);
        assert!(mesh.is_boundary_edge(0, 1));
        assert!(!mesh.is_boundary_edge(4, 1));
    }

    // Tests every cell and node of an open sheet touches the boundary
    // Verified by flagging only cells, not nodes
    #[test]
    fn test_boundary_flags() {
        let mesh = VertexMesh::new(two_squares(), vec![vec![0, 1, 4, 3], vec![1, 2, 5, 4]])
            .expect("valid mesh");

        assert_eq!(mesh.num_boundary_cells(), 2);
        assert!(mesh.interior_cells().is_empty());
        assert!((0..6).all(|node| mesh.is_boundary_node(node)));
        assert!(!mesh.is_boundary_node(6));
    }

    // Tests interior nodes of a larger sheet are not flagged
    // Verified by flagging every node of a boundary cell
    #[test]
    fn test_interior_nodes_not_flagged() {
        let mesh = HoneycombGenerator::new(4, 4).generate().expect("valid");
        let boundary_nodes = (0..mesh.num_nodes())
            .filter(|&node| mesh.is_boundary_node(node))
            .count();
        assert_eq!(boundary_nodes, 30);
    }

    // Tests clockwise elements are reversed
    // Verified by leaving element order untouched
    #[test]
    fn test_clockwise_elements_reoriented() {
        let mesh =
            VertexMesh::new(two_squares(), vec![vec![3, 4, 1, 0]]).expect("valid mesh");

        assert_eq!(mesh.cell_vertices(0), &[0, 1, 4, 3]);
        assert_eq!(mesh.cell_area(0), 1.0);
    }

    // Tests malformed elements are rejected
    // Verified by allowing repeated vertices
    #[test]
    fn test_invalid_elements() {
        let cases = [
            vec![vec![0, 1]],
            vec![vec![0, 1, 9]],
            vec![vec![0, 1, 1, 3]],
        ];

        for elements in cases {
            assert!(matches!(
                VertexMesh::new(two_squares(), elements),
                Err(AnalysisError::InvalidTopology { .. })
            ));
        }
    }

    // Tests an edge owned by three elements is rejected
    // Verified by only counting boundary edges
    #[test]
    fn test_over_shared_edge_rejected() {
        let nodes = array![[0.0, 0.0], [1.0, 0.0], [0.5, 1.0], [0.5, -1.0], [0.5, 2.0]];
        let elements = vec![vec![0, 1, 2], vec![1, 0, 3], vec![0, 1, 4]];

        let error = VertexMesh::new(nodes, elements).expect_err("edge shared three times");
        assert!(error.to_string().contains("shared by 3 elements"));
    }

    // Tests an edge is owned only by cells that join its vertices
    // Verified by counting any cell holding both vertices as an owner
    #[test]
    fn test_wrapped_cell_does_not_own_skipped_edge() {
        let mesh = wrapped_square();

        assert_eq!(mesh.cells_sharing_edge(0, 1), vec![0]);
        assert!(mesh.is_boundary_edge(1, 0));
        for (a, b) in [(1, 2), (2, 3), (3, 0)] {
            assert_eq!(mesh.cells_sharing_edge(a, b), vec![0, 1]);
        }
        assert_eq!(mesh.num_boundary_cells(), 2);
        assert!(mesh.is_boundary_node(0));
        assert!(mesh.is_boundary_node(1));
        assert!(!mesh.is_boundary_node(2));
        assert!(!mesh.is_boundary_node(3));
    }

    // Tests cells holding both vertices of an edge without joining them are
    // not counted against it
    // Verified by rejecting the mesh as an edge shared by three elements
    #[test]
    fn test_enclosed_wrap_is_valid() {
        let mesh = enclosed_wrap();

        assert_eq!(mesh.cells_sharing_edge(0, 1), vec![0, 2]);
        assert_eq!(mesh.cells_sharing_edge(0, 7), vec![1, 2]);
        assert_eq!(mesh.interior_cells(), vec![0, 1, 2]);
        assert_eq!(mesh.num_boundary_cells(), 4);
        assert!((0..10).all(|node| !mesh.is_boundary_node(node)));
        assert!((10..14).all(|node| mesh.is_boundary_node(node)));
    }

    // Tests node arrays must be two-dimensional points
    // Verified by ignoring the column count
    #[test]
    fn test_node_columns_checked() {
        let nodes = Array2::<f64>::zeros((4, 3));
        assert!(matches!(
            VertexMesh::new(nodes, vec![vec![0, 1, 2]]),
            Err(AnalysisError::InvalidTopology { .. })
        ));
    }

    // Tests data items can be edited per cell and across the mesh
    // Verified by writing items to a copy of the cell data
    #[test]
    fn test_cell_data_editing() {
        let mut mesh = VertexMesh::new(two_squares(), vec![vec![0, 1, 4, 3], vec![1, 2, 5, 4]])
            .expect("valid mesh");

        mesh.set_item_on_all_cells("target area", 1.0);
        if let Some(data) = mesh.cell_data_mut(1) {
            data.set_item("target area", 2.0);
        }
        assert!(mesh.cell_data_mut(5).is_none());

        assert_eq!(mesh.cell_data_item(0, "target area").ok(), Some(1.0));
        assert_eq!(mesh.cell_data_item(1, "target area").ok(), Some(2.0));
    }
}
