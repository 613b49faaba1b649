//! Shared settings store with write-through persistence.
//!
//! # Design
//! - One store per session, constructed at startup and handed to every view.
//! - The handle is `Rc`-backed: the UI is single-threaded and has one writer.
//! - Persistence is an observer like any other and runs first on each change.
//! - Changes raised from inside an observer are queued, so every observer sees
//!   changes in the order they were applied.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

use crate::config::SettingsConfig;
use crate::error::{StorageError, StorageResult};
use crate::model::{DisplayPreference, Language, Settings, SettingsField, SettingsPatch, Theme};
use crate::storage::SettingsStorage;

/// How the store obtained its initial value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsOrigin {
    /// Parsed from the persistent slot.
    Persisted,
    /// The slot was empty; defaults were used.
    Defaults,
    /// The slot could not be read or parsed; defaults were used.
    Recovered,
}

/// Notification delivered to observers after each update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsChange {
    /// Value before the update.
    pub previous: Settings,
    /// Value after the update.
    pub current: Settings,
    /// Top-level fields that differ; empty when the patch was a no-op.
    pub changed: Vec<SettingsField>,
}

/// Receives every settings change.
pub trait SettingsObserver {
    /// Called once per applied update.
    fn settings_changed(&self, change: &SettingsChange);
}

impl<F> SettingsObserver for F
where
    F: Fn(&SettingsChange),
{
    fn settings_changed(&self, change: &SettingsChange) {
        self(change);
    }
}

/// Observer mirroring each new value into the persistent slot.
pub struct WriteThrough {
    storage: Rc<dyn SettingsStorage>,
    key: String,
}

impl WriteThrough {
    /// Persist into `key` of `storage`.
    #[must_use]
    pub fn new(storage: Rc<dyn SettingsStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Serialize `settings` and write it to the slot.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when serialization or the write fails.
    pub fn persist(&self, settings: &Settings) -> StorageResult<()> {
        let raw =
            serde_json::to_string(settings).map_err(|source| StorageError::Serialize { source })?;
        self.storage.write(&self.key, &raw)?;
        debug!(key = %self.key, "settings persisted");
        Ok(())
    }
}

impl SettingsObserver for WriteThrough {
    fn settings_changed(&self, change: &SettingsChange) {
        if let Err(err) = self.persist(&change.current) {
            warn!(key = %self.key, error = %err, "failed to persist settings");
        }
    }
}

/// Read and parse the slot without applying any fallback.
///
/// # Errors
///
/// Returns a [`StorageError`] when the slot cannot be read or does not hold a
/// settings document.
pub fn read_persisted(storage: &dyn SettingsStorage, key: &str) -> StorageResult<Option<Settings>> {
    let Some(raw) = storage.read(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Malformed {
            key: key.to_string(),
            source,
        })
}

struct Loaded {
    settings: Settings,
    origin: SettingsOrigin,
    /// Whether the resolved value may replace the slot contents.
    seed_slot: bool,
}

fn load_or_default(storage: &dyn SettingsStorage, key: &str) -> Loaded {
    match read_persisted(storage, key) {
        Ok(Some(settings)) => Loaded {
            settings,
            origin: SettingsOrigin::Persisted,
            seed_slot: true,
        },
        Ok(None) => Loaded {
            settings: Settings::default(),
            origin: SettingsOrigin::Defaults,
            seed_slot: true,
        },
        Err(err @ StorageError::Malformed { .. }) => {
            warn!(key, error = %err, "stored settings malformed; using defaults");
            Loaded {
                settings: Settings::default(),
                origin: SettingsOrigin::Recovered,
                seed_slot: true,
            }
        }
        Err(err) => {
            warn!(key, error = %err, "stored settings unreadable; using defaults");
            Loaded {
                settings: Settings::default(),
                origin: SettingsOrigin::Recovered,
                seed_slot: false,
            }
        }
    }
}

type ObserverSlot = (u64, Rc<dyn SettingsObserver>);

struct StoreInner {
    key: String,
    origin: SettingsOrigin,
    current: RefCell<Settings>,
    observers: RefCell<Vec<ObserverSlot>>,
    next_id: Cell<u64>,
    pending: RefCell<VecDeque<SettingsChange>>,
    dispatching: Cell<bool>,
}

struct DispatchGuard<'a>(&'a StoreInner);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.pending.borrow_mut().clear();
        self.0.dispatching.set(false);
    }
}

/// Cheap-to-clone handle to the session's settings.
#[derive(Clone)]
pub struct SettingsStore {
    inner: Rc<StoreInner>,
}

impl SettingsStore {
    /// Load settings from `storage` and install write-through persistence.
    ///
    /// Empty, unreadable or malformed slots resolve to [`Settings::default`].
    /// The resolved value is written back once so the slot holds a complete
    /// document, except when the read itself failed: the slot is then left
    /// as it was until the next update.
    pub fn initialize<S>(storage: S, config: &SettingsConfig) -> Self
    where
        S: SettingsStorage + 'static,
    {
        Self::from_shared(Rc::new(storage), config.storage_key.clone())
    }

    /// Same as [`SettingsStore::initialize`] for storage already behind an `Rc`.
    pub fn from_shared(storage: Rc<dyn SettingsStorage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let Loaded {
            settings,
            origin,
            seed_slot,
        } = load_or_default(storage.as_ref(), &key);
        let persistence = WriteThrough::new(storage, key.clone());
        if seed_slot
            && let Err(err) = persistence.persist(&settings)
        {
            warn!(key = %key, error = %err, "failed to persist initial settings");
        }
        debug!(key = %key, ?origin, "settings store initialised");

        let store = Self {
            inner: Rc::new(StoreInner {
                key,
                origin,
                current: RefCell::new(settings),
                observers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                pending: RefCell::new(VecDeque::new()),
                dispatching: Cell::new(false),
            }),
        };
        store.register(Rc::new(persistence));
        store
    }

    /// Current value.
    #[must_use]
    pub fn snapshot(&self) -> Settings {
        *self.inner.current.borrow()
    }

    /// How the initial value was obtained.
    #[must_use]
    pub fn origin(&self) -> SettingsOrigin {
        self.inner.origin
    }

    /// Slot key used for persistence.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.inner.key
    }

    /// Merge `patch` into the current value, notify observers and return the
    /// new value.
    pub fn update(&self, patch: SettingsPatch) -> Settings {
        let change = {
            let mut current = self.inner.current.borrow_mut();
            let previous = *current;
            let next = previous.merged(&patch);
            *current = next;
            SettingsChange {
                previous,
                current: next,
                changed: previous.changed_fields(&next),
            }
        };
        let next = change.current;
        self.inner.pending.borrow_mut().push_back(change);
        self.dispatch();
        next
    }

    /// Replace the theme.
    pub fn set_theme(&self, theme: Theme) -> Settings {
        self.update(SettingsPatch::theme(theme))
    }

    /// Replace the language.
    pub fn set_language(&self, language: Language) -> Settings {
        self.update(SettingsPatch::language(language))
    }

    /// Flip one display toggle, carrying the other over unchanged.
    pub fn toggle_display_preference(&self, preference: DisplayPreference) -> Settings {
        let patch = self.snapshot().toggle_patch(preference);
        self.update(patch)
    }

    /// Restore every field to its default.
    pub fn reset(&self) -> Settings {
        self.update(SettingsPatch::full(Settings::default()))
    }

    /// Register an observer for future changes; dropping the returned
    /// [`Subscription`] unregisters it.
    pub fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: SettingsObserver + 'static,
    {
        let id = self.register(Rc::new(observer));
        Subscription {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Number of registered observers, persistence included.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }

    fn register(&self, observer: Rc<dyn SettingsObserver>) -> u64 {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.observers.borrow_mut().push((id, observer));
        id
    }

    fn dispatch(&self) {
        if self.inner.dispatching.replace(true) {
            return;
        }
        let _guard = DispatchGuard(&self.inner);
        loop {
            let Some(change) = self.inner.pending.borrow_mut().pop_front() else {
                break;
            };
            let observers: Vec<Rc<dyn SettingsObserver>> = self
                .inner
                .observers
                .borrow()
                .iter()
                .map(|(_, observer)| Rc::clone(observer))
                .collect();
            for observer in observers {
                observer.settings_changed(&change);
            }
        }
    }
}

impl PartialEq for SettingsStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsStore")
            .field("key", &self.inner.key)
            .field("origin", &self.inner.origin)
            .field("current", &*self.inner.current.borrow())
            .finish_non_exhaustive()
    }
}

/// Registration handle returned by [`SettingsStore::subscribe`].
#[must_use = "dropping a subscription unregisters the observer"]
pub struct Subscription {
    store: Weak<StoreInner>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner
                .observers
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
