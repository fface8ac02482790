//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use cubemaze::MazeError;
    use cubemaze::io::error::{invalid_parameter, topology_error};
    use cubemaze::spatial::Cell;
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = MazeError::FileSystem {
            path: "/tmp/maze.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(topology_error(&"broken").source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("side_length", &0, &"must be a positive integer");

        let message = error.to_string();
        assert!(message.contains("side_length"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be a positive integer"));
    }

    #[test]
    fn test_position_errors() {
        let outside = MazeError::OutsideNet { position: [0, 1] };
        assert!(outside.to_string().contains("(0, 1)"));

        let transition = MazeError::InvalidTransition {
            position: [3, 4],
            from: Cell::Passage,
        };
        let message = transition.to_string();
        assert!(message.contains("(3, 4)"));
        assert!(message.contains("passage"));
    }

    #[test]
    fn test_topology_error() {
        let error = topology_error(&"edge 7 has no partner");
        assert!(matches!(
            error,
            MazeError::Topology { ref reason } if reason == "edge 7 has no partner"
        ));
        assert!(error.to_string().contains("edge 7 has no partner"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        use std::path::PathBuf;

        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = MazeError::ImageExport {
            path: PathBuf::from("/readonly/maze.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/readonly/maze.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let error: MazeError = std::io::Error::other("disk full").into();
        assert!(matches!(
            error,
            MazeError::FileSystem {
                operation: "unknown",
                ..
            }
        ));
    }
}
