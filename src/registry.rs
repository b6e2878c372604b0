//! # Table Registry
//!
//! Every binder (`Handle::new`, [`bind`](crate::bind) and the named
//! binders of `impl_instance!`) gets its table here, so one
//! `(capability, concrete type)` pair has one table no matter how it is
//! bound. Rust has no generic statics, so each pair gets one slot in a
//! process-wide map keyed by the two `TypeId`s:
//!
//! ```text
//! (TypeId<dyn Show>, TypeId<Antioch>) -> &'static OnceLock<ShowTable>
//! (TypeId<dyn Show>, TypeId<i32>)     -> &'static OnceLock<ShowTable>
//! (TypeId<dyn Enum>, TypeId<i32>)     -> &'static OnceLock<EnumTable>
//! ```
//!
//! The map lock only guards slot creation. Tables are built inside the
//! slot's `OnceLock` with the lock released, so building a compound table
//! can recursively fetch its supertrait tables, and concurrent first binds
//! of one pair still build exactly one table.

use core::any::{Any, TypeId};
use core::sync::atomic::{AtomicUsize, Ordering};
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::capability::DeriveTable;

type Slot = OnceLock<Box<dyn Any + Send + Sync>>;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct Key {
    capability: TypeId,
    concrete: TypeId,
}

impl Key {
    fn of<C: ?Sized + 'static, T: ?Sized + 'static>() -> Self {
        Key {
            capability: TypeId::of::<C>(),
            concrete: TypeId::of::<T>(),
        }
    }
}

struct Entry {
    slot: &'static Slot,
    capability: &'static str,
    concrete: &'static str,
}

static TABLES: RwLock<Option<HashMap<Key, Entry>>> = RwLock::new(None);
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

/// The dispatch table of `C` for `T`, derived on first request.
pub fn table<C, T>() -> &'static C::Table
where
    C: ?Sized + DeriveTable<T>,
    T: Any,
{
    let table = slot::<C, T>().get_or_init(|| {
        CONSTRUCTIONS.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(
            capability = C::NAME,
            concrete = core::any::type_name::<T>(),
            "dispatch table constructed"
        );
        let table: Box<dyn Any + Send + Sync> = Box::new(C::derive_table());
        table
    });

    match (**table).downcast_ref::<C::Table>() {
        Some(table) => table,
        // The key includes TypeId<C> and C fixes the table type.
        None => unreachable!("registry slot for `{}` holds a foreign table", C::NAME),
    }
}

fn slot<C, T>() -> &'static Slot
where
    C: ?Sized + DeriveTable<T>,
    T: Any,
{
    let key = Key::of::<C, T>();

    {
        let tables = TABLES.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = tables.as_ref().and_then(|m| m.get(&key)) {
            return entry.slot;
        }
    }

    let mut tables = TABLES.write().unwrap_or_else(PoisonError::into_inner);
    tables
        .get_or_insert_with(HashMap::new)
        .entry(key)
        .or_insert_with(|| Entry {
            slot: Box::leak(Box::new(OnceLock::new())),
            capability: C::NAME,
            concrete: core::any::type_name::<T>(),
        })
        .slot
}

/// Whether the table of `C` for `T` has been built.
pub fn contains<C, T>() -> bool
where
    C: ?Sized + DeriveTable<T>,
    T: Any,
{
    let key = Key::of::<C, T>();
    let tables = TABLES.read().unwrap_or_else(PoisonError::into_inner);
    tables
        .as_ref()
        .and_then(|m| m.get(&key))
        .is_some_and(|entry| entry.slot.get().is_some())
}

/// Total number of tables the registry has built in this process.
pub fn constructions() -> usize {
    CONSTRUCTIONS.load(Ordering::Relaxed)
}

/// One `(capability, concrete type)` pair known to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub capability: &'static str,
    pub concrete: &'static str,
    pub built: bool,
}

/// Snapshot of every pair requested so far, sorted by capability then type.
pub fn registrations() -> Vec<Registration> {
    let tables = TABLES.read().unwrap_or_else(PoisonError::into_inner);
    let mut out: Vec<_> = tables
        .iter()
        .flat_map(|m| m.values())
        .map(|entry| Registration {
            capability: entry.capability,
            concrete: entry.concrete,
            built: entry.slot.get().is_some(),
        })
        .collect();
    out.sort_by(|a, b| (a.capability, a.concrete).cmp(&(b.capability, b.concrete)));
    out
}
