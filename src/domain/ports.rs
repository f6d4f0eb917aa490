/// Common view over the CLI and web configurations, so startup code that
/// loads the dataset does not care which front end it serves.
pub trait ConfigProvider: Send + Sync {
    fn dataset_path(&self) -> &str;
    fn verbose(&self) -> bool;
}
