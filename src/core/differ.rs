//! Differ - Riconciliazione tra entità persistite e richieste parziali
//!
//! Un update PUT arriva con la stessa forma dell'entità ma con i campi non
//! inviati lasciati al valore zero del tipo. Il merge tiene il valore
//! salvato per ogni campo zero e sovrascrive con il valore della richiesta
//! per ogni campo non-zero.

use chrono::{DateTime, NaiveDate, Utc};

/// Classifica un valore come "assente" ai fini del merge.
///
/// A field at its zero value means "the client did not send this field".
/// The flip side: a client can never set a field back to `""`, `0` or
/// `false` through an update, because that is indistinguishable from
/// omitting it. Callers of the catalog API rely on this behavior, so it
/// stays as is.
pub trait ZeroValue {
    fn is_zero(&self) -> bool;
}

impl ZeroValue for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl ZeroValue for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

macro_rules! zero_value_for_number {
    ($($t:ty),*) => {
        $(
            impl ZeroValue for $t {
                fn is_zero(&self) -> bool {
                    *self == 0 as $t
                }
            }
        )*
    };
}

zero_value_for_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl<T> ZeroValue for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T> ZeroValue for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

// Per le date il sentinel è il valore di default del tipo, come per
// qualsiasi campo mai valorizzato dal client.
impl ZeroValue for NaiveDate {
    fn is_zero(&self) -> bool {
        *self == NaiveDate::default()
    }
}

impl ZeroValue for DateTime<Utc> {
    fn is_zero(&self) -> bool {
        *self == DateTime::<Utc>::default()
    }
}

/// Merge di un singolo campo: zero nella patch → si tiene il vecchio.
pub fn merged<T: ZeroValue + Clone>(old: &T, patch: &T) -> T {
    if patch.is_zero() {
        old.clone()
    } else {
        patch.clone()
    }
}

/// Merge tipizzato per entità: ogni implementazione elenca i campi
/// pubblici uno per uno con [`merged`].
///
/// Invariants every implementation keeps:
/// - the identifier comes from `self` (the stored row), whatever the
///   patch carries;
/// - `created_at`/`updated_at` are not part of the public shape and come
///   from `self` too;
/// - pure function, neither input is modified.
///
/// Entità di forma diversa non possono essere mischiate: il tipo è uno
/// solo, quindi il mismatch di forma non esiste a runtime.
pub trait Differ: Sized {
    fn merge_from(&self, patch: &Self) -> Self;
}
