use async_trait::async_trait;

use crate::{
    adapters::persistence::{JsonFilePersistence, read_array, write_array},
    app_error::AppResult,
    domain::entities::waitlist_entry::WaitlistRecord,
    use_cases::waitlist::WaitlistRepo,
};

#[async_trait]
impl WaitlistRepo for JsonFilePersistence {
    async fn load_entries(&self) -> AppResult<Vec<WaitlistRecord>> {
        Ok(read_array(self.waitlist_path()).await)
    }

    async fn save_entries(&self, entries: &[WaitlistRecord]) -> AppResult<()> {
        write_array(self.waitlist_path(), entries).await
    }
}
