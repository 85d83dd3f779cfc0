use async_trait::async_trait;

/// One open export artifact; rows land in the order they are written
#[async_trait]
pub trait ExportHandle: Send {
    /// Append one record
    async fn write_row(
        &mut self,
        fields: &[String],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Flush buffered rows and close the artifact
    async fn finish(
        self: Box<Self>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

#[async_trait]
pub trait ExportWriter: Send + Sync {
    /// Open a fresh artifact under the given name
    async fn open(
        &self,
        name: &str,
    ) -> Result<Box<dyn ExportHandle>, Box<dyn std::error::Error + Send + Sync>>;
}
