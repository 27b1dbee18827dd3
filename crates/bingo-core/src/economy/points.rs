use std::sync::{Mutex, MutexGuard};

/// External spendable point balance.
///
/// `try_spend` is the only way to reduce the balance: the check and the
/// deduction happen under one lock.
pub trait PointStore: Send + Sync {
    fn balance(&self) -> u64;

    /// Deduct `amount` if the balance covers it. Returns whether it did.
    fn try_spend(&self, amount: u64) -> bool;

    fn deposit(&self, amount: u64);
}

/// Mutex-guarded balance held in memory
#[derive(Debug, Default)]
pub struct InMemoryPointStore {
    balance: Mutex<u64>,
}

impl InMemoryPointStore {
    pub fn new(balance: u64) -> Self {
        Self {
            balance: Mutex::new(balance),
        }
    }

    fn lock(&self) -> MutexGuard<'_, u64> {
        // A poisoned balance is still a valid integer
        self.balance.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PointStore for InMemoryPointStore {
    fn balance(&self) -> u64 {
        *self.lock()
    }

    fn try_spend(&self, amount: u64) -> bool {
        let mut balance = self.lock();
        if *balance >= amount {
            *balance -= amount;
            true
        } else {
            false
        }
    }

    fn deposit(&self, amount: u64) {
        let mut balance = self.lock();
        *balance = balance.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_spend_within_balance() {
        let store = InMemoryPointStore::new(10);
        assert!(store.try_spend(4));
        assert_eq!(store.balance(), 6);
        assert!(store.try_spend(6));
        assert_eq!(store.balance(), 0);
    }

    #[test]
    fn test_spend_over_balance_leaves_it_untouched() {
        let store = InMemoryPointStore::new(3);
        assert!(!store.try_spend(4));
        assert_eq!(store.balance(), 3);
    }

    #[test]
    fn test_deposit() {
        let store = InMemoryPointStore::default();
        store.deposit(7);
        assert_eq!(store.balance(), 7);
    }

    #[test]
    fn test_concurrent_spends_never_overdraw() {
        let store = Arc::new(InMemoryPointStore::new(100));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || (0..50).filter(|_| store.try_spend(1)).count())
            })
            .collect();

        let spent: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(spent, 100);
        assert_eq!(store.balance(), 0);
    }
}
