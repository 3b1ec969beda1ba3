use anchor_lang::prelude::*;

use crate::constants::MAX_RECIPIENTS;
use crate::error::VestingError;

/// A single recipient entry stored in the recipients table PDA.
///
/// `total_granted` and `start_ts` are fixed at registration; `withdrawn` is
/// the only mutable field and never decreases.
#[zero_copy]
pub struct RecipientEntry {
    pub wallet: Pubkey,
    pub total_granted: u64,
    pub start_ts: i64,
    pub withdrawn: u64,
}

/// PDA holding the full recipients table (<= `MAX_RECIPIENTS` entries).
///
/// Entries are in registration order; only the first `count` are live.
/// There is no deletion path.
#[account(zero_copy)]
pub struct Recipients {
    pub entries: [RecipientEntry; MAX_RECIPIENTS],
    pub count: u64,
}

impl Recipients {
    /// Space for discriminator + fixed entries array + count.
    pub const fn space() -> usize {
        8 + core::mem::size_of::<Recipients>()
    }

    fn live(&self) -> &[RecipientEntry] {
        &self.entries[..self.count as usize]
    }

    pub fn find(&self, wallet: &Pubkey) -> Option<&RecipientEntry> {
        self.live().iter().find(|e| e.wallet == *wallet)
    }

    pub fn find_mut(&mut self, wallet: &Pubkey) -> Option<&mut RecipientEntry> {
        let count = self.count as usize;
        self.entries[..count].iter_mut().find(|e| e.wallet == *wallet)
    }

    /// Append a new grant of `amount` to `wallet`, vesting from `now_ts`.
    pub fn register(
        &mut self,
        wallet: Pubkey,
        amount: u64,
        now_ts: i64,
    ) -> core::result::Result<(), VestingError> {
        if amount == 0 {
            return Err(VestingError::InvalidAmount);
        }
        if self.find(&wallet).is_some() {
            return Err(VestingError::AlreadyRegistered);
        }
        let idx = self.count as usize;
        if idx >= MAX_RECIPIENTS {
            return Err(VestingError::RecipientListFull);
        }
        self.entries[idx] = RecipientEntry {
            wallet,
            total_granted: amount,
            start_ts: now_ts,
            withdrawn: 0,
        };
        self.count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck::Zeroable;

    fn wallet(byte: u8) -> Pubkey {
        Pubkey::new_from_array([byte; 32])
    }

    #[test]
    fn register_and_find() {
        let mut table = Recipients::zeroed();
        table.register(wallet(1), 1_000, 100).unwrap();
        table.register(wallet(2), 2_000, 200).unwrap();
        assert_eq!(table.count, 2);

        let e = table.find(&wallet(2)).unwrap();
        assert_eq!(e.total_granted, 2_000);
        assert_eq!(e.start_ts, 200);
        assert_eq!(e.withdrawn, 0);

        assert!(table.find(&wallet(3)).is_none());
    }

    #[test]
    fn duplicate_registration_rejected_and_entry_unchanged() {
        let mut table = Recipients::zeroed();
        table.register(wallet(1), 1_000, 100).unwrap();
        assert!(matches!(
            table.register(wallet(1), 9_999, 500),
            Err(VestingError::AlreadyRegistered)
        ));
        assert_eq!(table.count, 1);
        let e = table.find(&wallet(1)).unwrap();
        assert_eq!(e.total_granted, 1_000);
        assert_eq!(e.start_ts, 100);
    }

    #[test]
    fn zero_amount_rejected() {
        let mut table = Recipients::zeroed();
        assert!(matches!(
            table.register(wallet(1), 0, 100),
            Err(VestingError::InvalidAmount)
        ));
        assert_eq!(table.count, 0);
    }

    #[test]
    fn capacity_enforced() {
        let mut table = Recipients::zeroed();
        for i in 0..MAX_RECIPIENTS {
            table.register(wallet(i as u8 + 1), 1, 0).unwrap();
        }
        assert!(matches!(
            table.register(wallet(255), 1, 0),
            Err(VestingError::RecipientListFull)
        ));
    }
}
