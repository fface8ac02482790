//! Tests for carve capture and GIF export

#[cfg(test)]
mod tests {
    use cubemaze::MazeError;
    use cubemaze::algorithm::generator::MazeGenerator;
    use cubemaze::io::visualization::{CarveEvent, VisualizationCapture};
    use cubemaze::spatial::CubeNet;

    #[test]
    fn test_record_events() {
        let mut capture = VisualizationCapture::new(4);
        capture.record_carve([3, 3], 1);
        capture.record_carve([3, 2], 2);

        assert_eq!(capture.event_count(), 2);
        assert_eq!(
            capture.events().last(),
            Some(&CarveEvent {
                position: [3, 2],
                iteration: 2,
            })
        );

        capture.clear();
        assert_eq!(capture.event_count(), 0);
    }

    #[test]
    fn test_empty_capture_rejected() {
        let net = CubeNet::new(2).expect("valid side length");
        let dir = tempfile::tempdir().expect("temp dir");
        let capture = VisualizationCapture::default();
        let result = capture.export_gif(&net, &dir.path().join("a.gif"), 2, 10);
        assert!(matches!(result, Err(MazeError::InvalidParameter { .. })));
    }

    // Tests replay fails when an event carves the same cell twice
    // Verified by ignoring replay errors
    #[test]
    fn test_replay_rejects_repeated_carve() {
        let net = CubeNet::new(2).expect("valid side length");
        let mut capture = VisualizationCapture::new(2);
        capture.record_carve([3, 3], 1);
        capture.record_carve([3, 3], 2);

        let dir = tempfile::tempdir().expect("temp dir");
        let result = capture.export_gif(&net, &dir.path().join("bad.gif"), 2, 10);
        assert!(matches!(result, Err(MazeError::InvalidTransition { .. })));
    }

    // Tests a generated run exports a decodable GIF
    #[test]
    fn test_export_generation_gif() {
        let mut generator = MazeGenerator::seeded(3, 4).expect("valid side length");
        generator.enable_visualization();
        generator.generate(None).expect("generation");

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out").join("growth.gif");
        generator.export_visualization(&path, 2).expect("export");

        let loaded = image::open(&path).expect("readable gif");
        assert_eq!((loaded.width(), loaded.height()), (24, 18));
    }
}
