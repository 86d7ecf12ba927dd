// Administrator Access Gate
// Single transferable administrator identity. There is exactly one
// administrator at all times; the null identity is never accepted.

use crate::error::{LedgerError, LedgerResult};
use crate::types::Identity;

/// Single-authority access check
#[derive(Clone, Debug)]
pub struct AccessGate {
    administrator: Identity,
}

impl AccessGate {
    /// Create a gate with the given initial administrator
    ///
    /// # Returns
    /// - `Err(InvalidTarget)` if the administrator is the null identity
    pub fn new(administrator: Identity) -> LedgerResult<Self> {
        if administrator.is_zero() {
            return Err(LedgerError::InvalidTarget);
        }
        Ok(Self { administrator })
    }

    /// Current administrator identity
    pub fn current_administrator(&self) -> &Identity {
        &self.administrator
    }

    /// Check that the caller is the administrator
    pub fn require_administrator(&self, caller: &Identity) -> LedgerResult<()> {
        if *caller != self.administrator {
            return Err(LedgerError::Unauthorized);
        }
        Ok(())
    }

    /// Replace the administrator
    ///
    /// # Returns
    /// - `Ok(Identity)`: The previous administrator
    /// - `Err(Unauthorized)` if the caller is not the administrator
    /// - `Err(InvalidTarget)` if the new administrator is the null identity
    pub fn transfer_administrator(
        &mut self,
        caller: &Identity,
        new_admin: &Identity,
    ) -> LedgerResult<Identity> {
        self.require_administrator(caller)?;
        if new_admin.is_zero() {
            return Err(LedgerError::InvalidTarget);
        }

        let previous = self.administrator;
        self.administrator = *new_admin;
        Ok(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Identity {
        Identity::new([10u8; 32])
    }

    fn other() -> Identity {
        Identity::new([1u8; 32])
    }

    #[test]
    fn test_new_rejects_zero_admin() {
        assert_eq!(
            AccessGate::new(Identity::zero()).err(),
            Some(LedgerError::InvalidTarget)
        );
    }

    #[test]
    fn test_require_administrator() {
        let gate = AccessGate::new(admin()).unwrap();
        assert!(gate.require_administrator(&admin()).is_ok());
        assert_eq!(
            gate.require_administrator(&other()),
            Err(LedgerError::Unauthorized)
        );
    }

    #[test]
    fn test_transfer_administrator() {
        let mut gate = AccessGate::new(admin()).unwrap();
        let previous = gate.transfer_administrator(&admin(), &other()).unwrap();
        assert_eq!(previous, admin());
        assert_eq!(*gate.current_administrator(), other());

        // Old administrator loses access
        assert_eq!(
            gate.require_administrator(&admin()),
            Err(LedgerError::Unauthorized)
        );
        assert!(gate.require_administrator(&other()).is_ok());
    }

    #[test]
    fn test_transfer_by_non_admin_fails() {
        let mut gate = AccessGate::new(admin()).unwrap();
        assert_eq!(
            gate.transfer_administrator(&other(), &other()),
            Err(LedgerError::Unauthorized)
        );
        assert_eq!(*gate.current_administrator(), admin());
    }

    #[test]
    fn test_transfer_to_zero_fails() {
        let mut gate = AccessGate::new(admin()).unwrap();
        assert_eq!(
            gate.transfer_administrator(&admin(), &Identity::zero()),
            Err(LedgerError::InvalidTarget)
        );
        assert_eq!(*gate.current_administrator(), admin());
    }
}
