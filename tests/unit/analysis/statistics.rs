//! Tests for interior moments and normalised neighbour correlation

#[cfg(test)]
mod tests {
    use crate::fixtures::two_interior_rectangles;
    use vertexstats::AnalysisError;
    use vertexstats::analysis::neighbours::{NeighbourGraph, build_interior_pairs};
    use vertexstats::analysis::statistics::{
        CellAttribute, DEGENERATE_VARIANCE_TOLERANCE, correlation, correlation_summary,
        mean_and_variance,
    };
    use vertexstats::topology::honeycomb::HoneycombGenerator;

    // Tests moments use interior cells only with population variance
    // Verified by including the boundary cell in the mean
    #[test]
    fn test_mean_and_variance_over_interior() {
        let tissue = two_interior_rectangles();
        let moments = mean_and_variance(&tissue, &CellAttribute::Area).expect("interior cells");

        assert_eq!(moments.count, 2);
        assert_eq!(moments.mean, 5.0);
        assert_eq!(moments.variance, 1.0);
    }

    // Tests the hand-computed correlation of two unlike neighbours
    // Verified by dividing the pair product by the interior count
    #[test]
    fn test_two_cell_area_correlation() {
        let tissue = two_interior_rectangles();
        let graph = build_interior_pairs(&tissue);
        let summary = correlation_summary(&tissue, &CellAttribute::Area, &graph)
            .expect("defined correlation");

        assert_eq!(summary.pairs, 1);
        assert_eq!(summary.pair_product_mean, 24.0);
        assert_eq!(summary.correlation, -1.0);
        assert_eq!(correlation(&tissue, &CellAttribute::Area, &graph).ok(), Some(-1.0));
    }

    // Tests every attribute kind evaluates through the same formula
    // Verified by counting only interior neighbours
    #[test]
    fn test_other_attributes() {
        let tissue = two_interior_rectangles().with_item("growth", &[1.0, 3.0, 100.0]);
        let graph = build_interior_pairs(&tissue);

        for attribute in [
            CellAttribute::Perimeter,
            CellAttribute::NeighbourCount,
            CellAttribute::DataItem("growth".to_string()),
        ] {
            let value = correlation(&tissue, &attribute, &graph).expect("defined correlation");
            assert_eq!(value, -1.0, "{}", attribute.label());
        }

        let count = mean_and_variance(&tissue, &CellAttribute::NeighbourCount)
            .expect("interior cells");
        assert_eq!(count.mean, 1.5);
    }

    // Tests a missing data item propagates as an error
    // Verified by skipping cells without the item
    #[test]
    fn test_missing_data_item() {
        let tissue = two_interior_rectangles();
        let graph = build_interior_pairs(&tissue);

        let result = correlation(&tissue, &CellAttribute::target_area(), &graph);
        assert!(matches!(
            result,
            Err(AnalysisError::MissingAttribute { ref item, .. }) if item == "target area"
        ));
    }

    // Tests an empty pair set is insufficient data
    // Verified by dividing by a zero pair count
    #[test]
    fn test_no_pairs_is_insufficient() {
        let tissue = two_interior_rectangles();

        match correlation(&tissue, &CellAttribute::Area, &NeighbourGraph::default()) {
            Err(AnalysisError::InsufficientData {
                interior_cells,
                pairs,
                ..
            }) => {
                assert_eq!(interior_cells, 2);
                assert_eq!(pairs, 0);
            }
            other => panic!("expected insufficient data, got {other:?}"),
        }
    }

    // Tests a sheet with one interior cell has moments but no correlation
    // Verified by returning zero when no pairs exist
    #[test]
    fn test_single_interior_cell() {
        let mesh = HoneycombGenerator::new(3, 3).generate().expect("valid");
        let graph = build_interior_pairs(&mesh);

        let moments = mean_and_variance(&mesh, &CellAttribute::Area).expect("one interior cell");
        assert_eq!(moments.count, 1);
        assert_eq!(moments.variance, 0.0);

        let error = correlation(&mesh, &CellAttribute::Area, &graph).expect_err("no pairs");
        assert!(error.is_statistical());
        assert!(matches!(error, AnalysisError::InsufficientData { .. }));
    }

    // Tests a sheet without interior cells has no moments
    // Verified by returning NaN moments
    #[test]
    fn test_no_interior_cells() {
        let mesh = HoneycombGenerator::new(2, 2).generate().expect("valid");
        assert!(matches!(
            mean_and_variance(&mesh, &CellAttribute::Perimeter),
            Err(AnalysisError::InsufficientData { interior_cells: 0, .. })
        ));
    }

    // Tests uniform areas make the correlation undefined
    // Verified by comparing the variance to exactly zero
    #[test]
    fn test_uniform_areas_are_degenerate() {
        let mesh = HoneycombGenerator::new(6, 6).generate().expect("valid");
        let graph = build_interior_pairs(&mesh);

        let moments = mean_and_variance(&mesh, &CellAttribute::Area).expect("interior cells");
        assert!((moments.mean - 1.0).abs() < 1e-12);
        assert!(moments.variance <= DEGENERATE_VARIANCE_TOLERANCE * moments.mean.powi(2));

        match correlation(&mesh, &CellAttribute::Area, &graph) {
            Err(AnalysisError::DegenerateStatistic { attribute, .. }) => {
                assert_eq!(attribute, "area");
            }
            other => panic!("expected degenerate statistic, got {other:?}"),
        }
    }

    // Tests jittered sheets give a finite, repeatable correlation
    // Verified by accumulating pair products in parallel arrival order
    #[test]
    fn test_jittered_correlation_is_repeatable() {
        let mesh = HoneycombGenerator::new(10, 10)
            .with_jitter(0.3)
            .with_seed(3)
            .generate()
            .expect("valid");
        let graph = build_interior_pairs(&mesh);

        let first = correlation_summary(&mesh, &CellAttribute::Area, &graph).expect("defined");
        let second = correlation_summary(&mesh, &CellAttribute::Area, &graph).expect("defined");

        assert!(first.correlation.is_finite());
        assert!(first.moments.variance > 0.0);
        assert_eq!(first.correlation.to_bits(), second.correlation.to_bits());
        assert_eq!(first, second);
    }
}
