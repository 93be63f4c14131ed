use crate::selectors::{
    CONFIRM_BUTTON, LOGIN_BUTTON, PASSWORD_FIELD, SLOT_ANCHORS, SLOT_PAYLOAD_ATTRIBUTE,
    USERNAME_FIELD,
};
use crate::{BrowserDriver, Error, Result};
use chrono::NaiveDate;
use teetime_core::{
    PortalConfig, SelectionPolicy, SlotCollection, SlotEntry, SlotPayload, TimeOfDay, TimeSlot,
    TimeSlotSelector,
};

/// A logged-in portal session that fetches, selects and books tee times.
///
/// Holds at most one fetched slot collection and at most one target. A new
/// fetch replaces the collection and clears the target.
pub struct BookingSession<D: BrowserDriver> {
    driver: D,
    config: PortalConfig,
    slots: Option<SlotCollection<D::Element>>,
    target: Option<usize>,
}

impl<D: BrowserDriver> BookingSession<D> {
    /// Session over `driver` that has not logged in yet
    pub fn new(driver: D, config: PortalConfig) -> Self {
        Self {
            driver,
            config,
            slots: None,
            target: None,
        }
    }

    /// Create a session and log in. On failure the driver is dropped; use
    /// [`BookingSession::new`] and [`BookingSession::sign_in`] to keep it.
    pub async fn login(driver: D, config: PortalConfig) -> Result<Self> {
        let session = Self::new(driver, config);
        session.sign_in().await?;
        Ok(session)
    }

    /// Log in with the configured credentials and open the tee time listing
    pub async fn sign_in(&self) -> Result<()> {
        let config = &self.config;
        config.validate()?;

        tracing::info!("Logging in as {}", config.username);
        let driver = &self.driver;
        driver.navigate(&config.login_url).await?;

        let username = driver.find_element(USERNAME_FIELD).await?;
        driver.type_text(&username, &config.username).await?;
        let password = driver.find_element(PASSWORD_FIELD).await?;
        driver.type_text(&password, &config.password).await?;

        let login_button = driver.find_element(LOGIN_BUTTON).await?;
        driver.click(&login_button).await?;
        driver.wait_for_navigation().await?;

        driver.navigate(&config.listing_url).await?;
        tracing::info!("Logged in, tee time listing open");
        Ok(())
    }

    /// Scrape the bookable tee times for `date`, sorted by time.
    ///
    /// Returns their display texts.
    pub async fn fetch_available(&mut self, date: NaiveDate) -> Result<Vec<String>> {
        self.slots = None;
        self.target = None;

        let url = self.config.booking_url(date);
        tracing::info!("Fetching tee times for {}", date);
        self.driver.navigate(&url).await?;

        let mut entries = Vec::new();
        for selector in SLOT_ANCHORS {
            for element in self.driver.find_elements(selector).await? {
                if !self.is_bookable(&element).await? {
                    continue;
                }
                let text = self.driver.text(&element).await?.unwrap_or_default();
                let slot = TimeSlot::parse(text.trim())?;
                tracing::debug!("Bookable slot: {}", slot.display_text());
                entries.push(SlotEntry {
                    slot,
                    handle: element,
                });
            }
        }

        let collection = SlotCollection::new(date, entries);
        tracing::info!("Found {} available tee times on {}", collection.len(), date);

        let times = collection.display_texts();
        self.slots = Some(collection);
        Ok(times)
    }

    /// Display texts of the last fetch
    pub fn available_times(&self) -> Result<Vec<String>> {
        self.slots
            .as_ref()
            .map(SlotCollection::display_texts)
            .ok_or(Error::NotFetched)
    }

    /// Choose the slot to book relative to a time label such as `9:00 AM`
    pub fn set_target(&mut self, target_time: &str, policy: SelectionPolicy) -> Result<&TimeSlot> {
        self.target = None;
        let target = TimeOfDay::parse(target_time)?;
        self.set_target_time(target, policy)
    }

    /// Choose the slot to book relative to `target`
    pub fn set_target_time(
        &mut self,
        target: TimeOfDay,
        policy: SelectionPolicy,
    ) -> Result<&TimeSlot> {
        self.target = None;
        let slots = self.slots.as_ref().ok_or(Error::NotFetched)?;

        let index = TimeSlotSelector::new(policy).select_index(slots, target)?;
        self.target = Some(index);

        let slot = &slots.entries()[index].slot;
        tracing::info!("Target time set to {}", slot.display_text());
        Ok(slot)
    }

    /// The currently selected slot, if any
    pub fn target(&self) -> Option<&TimeSlot> {
        self.target_entry().map(|entry| &entry.slot)
    }

    /// Click the target slot and submit the booking request
    pub async fn book(&self) -> Result<TimeSlot> {
        let entry = self.target_entry().ok_or(Error::NoTarget)?;

        tracing::info!("Requesting tee time {}", entry.slot.display_text());
        self.driver.click(&entry.handle).await?;

        let confirm = self
            .driver
            .wait_for_element(CONFIRM_BUTTON, self.config.confirm_timeout)
            .await?;
        self.driver.click(&confirm).await?;

        tracing::info!("Booking request submitted for {}", entry.slot.display_text());
        Ok(entry.slot.clone())
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Give the driver back, e.g. to close the browser
    pub fn into_driver(self) -> D {
        self.driver
    }

    fn target_entry(&self) -> Option<&SlotEntry<D::Element>> {
        let index = self.target?;
        self.slots.as_ref()?.get(index)
    }

    async fn is_bookable(&self, element: &D::Element) -> Result<bool> {
        let Some(raw) = self.driver.attribute(element, SLOT_PAYLOAD_ATTRIBUTE).await? else {
            tracing::debug!("Slot anchor without {} skipped", SLOT_PAYLOAD_ATTRIBUTE);
            return Ok(false);
        };

        match SlotPayload::parse(&raw) {
            Ok(payload) => Ok(payload.is_bookable()),
            Err(e) => {
                tracing::warn!("Skipping slot with unreadable payload: {}", e);
                Ok(false)
            }
        }
    }
}
