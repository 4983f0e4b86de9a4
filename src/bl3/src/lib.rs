//! # bl3
//!
//! Borderlands 3 save editor library - container codec, item serials, and
//! editing.
//!
//! This library provides functionality to:
//! - Read and write the GVAS containers wrapping savegames and profiles
//! - Decode and re-encode obfuscated, bit-packed item serial numbers
//! - Edit character saves (level, currency, SDUs, playthroughs, items, ...)
//! - Edit profiles (bank, cosmetics, golden keys, guardian rank)
//! - Import and export item serials as `BL3(...)` text or CSV
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut save = bl3::Bl3Save::from_path("1.sav")?;
//!
//! println!("Character: {}", save.char_name());
//! println!("Level: {}", save.level());
//!
//! save.set_level(72, false)?;
//! save.set_money(1_000_000);
//! for index in 0..save.items().len() {
//!     let serial = save.item_mut(index).unwrap().serial_mut();
//!     if serial.can_have_mayhem() {
//!         let _ = serial.set_mayhem_level(10);
//!     }
//! }
//!
//! save.save_to("1-edited.sav")?;
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod envelope;
pub mod profile;
pub mod reference;
pub mod save;
pub mod serial;
pub mod transfer;

// Re-export commonly used items
#[doc(inline)]
pub use envelope::{EnvelopeError, FileKind, GvasHeader};
#[doc(inline)]
pub use profile::{Bl3Profile, ProfileError};
#[doc(inline)]
pub use save::{Bl3Item, Bl3Save, SaveError};
#[doc(inline)]
pub use serial::{ItemSerial, ParseTier, SerialError};
#[doc(inline)]
pub use transfer::{
    export_items, export_items_csv, import_items, BatchUpdate, ImportOptions, TransferError,
};

// Reference data (kinds, caps, asset paths)
#[doc(inline)]
pub use reference::challenges::ChallengeKind;
#[doc(inline)]
pub use reference::sdu::{AmmoKind, ProfileSduKind, SduKind};
#[doc(inline)]
pub use reference::slots::EquipSlot;
#[doc(inline)]
pub use reference::vehicles::VehicleKind;
#[doc(inline)]
pub use reference::{CharClass, CurrencyKind, PetKind, MAX_LEVEL, MAX_SUPPORTED_LEVEL};
