//! Tests for the generation progress display

#[cfg(test)]
mod tests {
    use cubemaze::io::progress::ProgressManager;

    // Tests updates before initialization are ignored
    #[test]
    fn test_uninitialized_manager_is_inert() {
        let manager = ProgressManager::new();
        manager.update(10, 3);
        manager.finish("done");
    }

    #[test]
    fn test_progress_lifecycle() {
        let mut manager = ProgressManager::default();
        manager.initialize(96);
        for passages in 1..=40 {
            manager.update(passages, 96 - passages);
        }
        manager.finish("complete");
    }
}
