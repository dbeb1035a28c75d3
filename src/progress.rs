// src/progress.rs
/// Progress reporting for operations that walk several pages.
/// The CLI draws it as a progress bar; tests record it.
pub trait Progress {
    /// Called at the start with the number of items to process.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One item (e.g. a sub-page) was processed.
    fn item_done(&mut self, _label: &str) {}

    /// Called once the walk is over.
    fn finish(&mut self) {}
}
