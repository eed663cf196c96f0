//! # Cart State
//!
//! The session's cart: one authoritative [`Cart`] behind a mutex, published
//! as immutable [`CartSnapshot`]s.
//!
//! ## Thread Safety
//! Every operation takes the lock, mutates, and publishes the new snapshot
//! before releasing it, so readers only ever see whole snapshots.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Presentation Action      Store Call              Cart Change           │
//! │  ───────────────────      ──────────              ───────────           │
//! │                                                                         │
//! │  Tap "+" ────────────────► increase_quantity() ─► qty += 1   [policy]   │
//! │                                                                         │
//! │  Tap "-" ────────────────► decrease_quantity() ─► qty -= 1   [policy]   │
//! │                                                    (qty 1 → removed)    │
//! │                                                                         │
//! │  Tap "Remove" ───────────► remove_line() ───────► line removed          │
//! │                                                                         │
//! │  "Add to cart" ──────────► add_snack() ─────────► new line / qty += 1   │
//! │                                                              [policy]   │
//! │                                                                         │
//! │  View Cart ──────────────► snapshot() ──────────► (read only)           │
//! │                                                                         │
//! │  [policy] = the call may be turned down by the FailurePolicy:           │
//! │             cart untouched, snackbar notified, TransientRejection.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use snack_core::{
    Cart, CartTotals, CoreError, CoreResult, Decrease, FailurePolicy, Money, NeverFail, OrderLine,
    Snack, SnackId,
};
use tokio::sync::watch;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::snackbar::{MessageId, NotificationSink};

/// Immutable, point-in-time copy of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// Advances on every published change; rejected calls leave it alone.
    pub version: u64,
    pub lines: Vec<OrderLine>,
    pub totals: CartTotals,
}

impl CartSnapshot {
    fn capture(cart: &Cart, version: u64, shipping_fee: Money) -> Self {
        CartSnapshot {
            version,
            lines: cart.lines().to_vec(),
            totals: cart.totals(shipping_fee),
        }
    }

    pub fn quantity_of(&self, snack_id: SnackId) -> Option<u32> {
        self.lines
            .iter()
            .find(|l| l.snack_id() == snack_id)
            .map(|l| l.quantity)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

struct CartInner {
    cart: Cart,
    /// Policy-governed calls seen so far.
    calls: u64,
    version: u64,
}

/// Owner of the session's order lines.
pub struct CartStore {
    session_id: Uuid,
    inner: Mutex<CartInner>,
    policy: Box<dyn FailurePolicy>,
    notifier: Arc<dyn NotificationSink>,
    shipping_fee: Money,
    snapshots: watch::Sender<CartSnapshot>,
}

impl CartStore {
    /// Creates a store seeded with `cart`.
    pub fn new(
        cart: Cart,
        policy: Box<dyn FailurePolicy>,
        notifier: Arc<dyn NotificationSink>,
        shipping_fee: Money,
    ) -> Self {
        let session_id = Uuid::new_v4();
        let initial = CartSnapshot::capture(&cart, 0, shipping_fee);
        let (snapshots, _) = watch::channel(initial);

        info!(
            %session_id,
            lines = cart.line_count(),
            policy = ?policy,
            "Cart session started"
        );

        CartStore {
            session_id,
            inner: Mutex::new(CartInner {
                cart,
                calls: 0,
                version: 0,
            }),
            policy,
            notifier,
            shipping_fee,
            snapshots,
        }
    }

    /// Empty cart, no shipping fee, never rejects.
    pub fn empty(notifier: Arc<dyn NotificationSink>) -> Self {
        Self::new(Cart::new(), Box::new(NeverFail), notifier, Money::zero())
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    fn lock(&self) -> MutexGuard<'_, CartInner> {
        self.inner.lock().expect("Cart mutex poisoned")
    }

    /// Adds one to the quantity of an existing line.
    ///
    /// ## Returns
    /// * `Ok(CartSnapshot)` - The newly published snapshot
    /// * `Err(TransientRejection)` - Turned down by the failure policy
    /// * `Err(SnackNotInCart)` - No line for that snack
    pub fn increase_quantity(&self, snack_id: SnackId) -> CoreResult<CartSnapshot> {
        self.governed(
            "increase_quantity",
            MessageId::CartIncreaseError,
            snack_id,
            |cart| cart.increase(snack_id).map(|qty| debug!(%snack_id, qty, "Quantity increased")),
        )
    }

    /// Takes one off the quantity of an existing line; at quantity 1 the
    /// line is removed.
    pub fn decrease_quantity(&self, snack_id: SnackId) -> CoreResult<CartSnapshot> {
        self.governed(
            "decrease_quantity",
            MessageId::CartDecreaseError,
            snack_id,
            |cart| {
                match cart.decrease(snack_id)? {
                    Decrease::Decremented(qty) => debug!(%snack_id, qty, "Quantity decreased"),
                    Decrease::Removed => debug!(%snack_id, "Line removed at quantity 1"),
                }
                Ok(())
            },
        )
    }

    /// Removes a line. Absent ids are a no-op and publish nothing.
    pub fn remove_line(&self, snack_id: SnackId) -> CartSnapshot {
        let mut inner = self.lock();
        if !inner.cart.remove(snack_id) {
            debug!(%snack_id, "remove_line: snack not in cart");
            return self.snapshots.borrow().clone();
        }

        debug!(%snack_id, "Line removed");
        self.publish(&mut inner)
    }

    /// Adds a snack with quantity 1, or bumps its existing line.
    pub fn add_snack(&self, snack: &Snack) -> CoreResult<CartSnapshot> {
        self.governed("add_snack", MessageId::CartAddError, snack.id, |cart| {
            cart.add(snack)
                .map(|qty| debug!(snack_id = %snack.id, qty, "Snack added"))
        })
    }

    /// Runs a policy-governed mutation.
    ///
    /// The call counter advances before the policy is asked, whatever the
    /// outcome. The sink is notified after the lock is released.
    fn governed<F>(
        &self,
        operation: &'static str,
        message: MessageId,
        snack_id: SnackId,
        mutate: F,
    ) -> CoreResult<CartSnapshot>
    where
        F: FnOnce(&mut Cart) -> CoreResult<()>,
    {
        let mut inner = self.lock();
        inner.calls += 1;
        let call = inner.calls;

        if self.policy.should_reject(call) {
            drop(inner);
            warn!(operation, call, %snack_id, "Cart call rejected by failure policy");
            self.notifier.notify(message);
            return Err(CoreError::TransientRejection { operation });
        }

        // Cart methods fail before touching any line.
        mutate(&mut inner.cart)?;
        Ok(self.publish(&mut inner))
    }

    fn publish(&self, inner: &mut CartInner) -> CartSnapshot {
        inner.version += 1;
        let snapshot = CartSnapshot::capture(&inner.cart, inner.version, self.shipping_fee);
        self.snapshots.send_replace(snapshot.clone());
        snapshot
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> CartSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn totals(&self) -> CartTotals {
        self.snapshots.borrow().totals
    }

    /// Receiver notified on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.snapshots.subscribe()
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("session_id", &self.session_id)
            .field("policy", &self.policy)
            .field("version", &self.snapshots.borrow().version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::snackbar::SnackbarManager;
    use snack_core::policy::policy_for_cadence;

    fn snack(id: i64, name: &str, cents: i64) -> Snack {
        Snack::new(id, name, "", Money::from_cents(cents), "")
    }

    fn seeded(policy: Box<dyn FailurePolicy>) -> (CartStore, Arc<SnackbarManager>) {
        let cart = Cart::from_lines(vec![
            OrderLine::new(snack(4, "Gingerbread", 499), 2),
            OrderLine::new(snack(6, "Ice Cream Sandwich", 1299), 3),
            OrderLine::new(snack(8, "KitKat", 549), 1),
        ])
        .unwrap();
        let snackbar = Arc::new(SnackbarManager::new());
        let store = CartStore::new(cart, policy, snackbar.clone(), Money::from_cents(369));
        (store, snackbar)
    }

    #[test]
    fn test_increase_and_decrease() {
        let (store, _) = seeded(Box::new(NeverFail));
        let id = SnackId::new(4);

        store.increase_quantity(id).unwrap();
        store.increase_quantity(id).unwrap();
        let snap = store.decrease_quantity(id).unwrap();

        assert_eq!(snap.quantity_of(id), Some(3));
        assert_eq!(snap.version, 3);
    }

    #[test]
    fn test_increase_has_no_upper_bound() {
        let (store, _) = seeded(Box::new(NeverFail));
        let id = SnackId::new(8);

        for _ in 0..120 {
            store.increase_quantity(id).unwrap();
        }

        let snap = store.snapshot();
        assert_eq!(snap.quantity_of(id), Some(121));
        assert_eq!(snap.version, 120);
    }

    #[test]
    fn test_decrease_at_one_removes_line() {
        let (store, _) = seeded(Box::new(NeverFail));

        let snap = store.decrease_quantity(SnackId::new(8)).unwrap();
        assert_eq!(snap.quantity_of(SnackId::new(8)), None);
        assert_eq!(snap.lines.len(), 2);
    }

    #[test]
    fn test_unknown_snack_is_not_found() {
        let (store, _) = seeded(Box::new(NeverFail));
        let before = store.snapshot();

        let err = store.increase_quantity(SnackId::new(99)).unwrap_err();
        assert_eq!(err, CoreError::SnackNotInCart(SnackId::new(99)));
        assert!(store.decrease_quantity(SnackId::new(99)).is_err());

        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_remove_line_is_idempotent() {
        let (store, _) = seeded(Box::new(NeverFail));

        let removed = store.remove_line(SnackId::new(6));
        assert_eq!(removed.lines.len(), 2);
        assert_eq!(removed.version, 1);

        let again = store.remove_line(SnackId::new(6));
        assert_eq!(again, removed);
    }

    #[test]
    fn test_mutations_keep_insertion_order() {
        let (store, _) = seeded(Box::new(NeverFail));

        store.increase_quantity(SnackId::new(8)).unwrap();
        store.decrease_quantity(SnackId::new(6)).unwrap();

        let ids: Vec<i64> = store
            .snapshot()
            .lines
            .iter()
            .map(|l| l.snack_id().get())
            .collect();
        assert_eq!(ids, vec![4, 6, 8]);
    }

    #[test]
    fn test_every_fifth_call_is_rejected_and_leaves_snapshot_untouched() {
        let (store, snackbar) = seeded(policy_for_cadence(5));
        let id = SnackId::new(4);

        for _ in 0..4 {
            store.increase_quantity(id).unwrap();
        }
        let before = serde_json::to_string(&store.snapshot()).unwrap();

        let err = store.increase_quantity(id).unwrap_err();
        assert!(err.is_transient());

        let after = serde_json::to_string(&store.snapshot()).unwrap();
        assert_eq!(before, after);
        assert_eq!(
            snackbar.current().unwrap().message,
            MessageId::CartIncreaseError
        );

        // Sixth call goes through again.
        let snap = store.increase_quantity(id).unwrap();
        assert_eq!(snap.quantity_of(id), Some(7));
    }

    #[test]
    fn test_not_found_calls_advance_the_counter() {
        let (store, snackbar) = seeded(policy_for_cadence(2));

        assert!(matches!(
            store.increase_quantity(SnackId::new(99)),
            Err(CoreError::SnackNotInCart(_))
        ));
        assert!(matches!(
            store.decrease_quantity(SnackId::new(4)),
            Err(CoreError::TransientRejection { operation: "decrease_quantity" })
        ));
        assert_eq!(
            snackbar.current().unwrap().message,
            MessageId::CartDecreaseError
        );
    }

    #[test]
    fn test_remove_line_ignores_policy() {
        let (store, _) = seeded(policy_for_cadence(1));

        assert!(store.increase_quantity(SnackId::new(4)).is_err());
        let snap = store.remove_line(SnackId::new(4));
        assert_eq!(snap.lines.len(), 2);
    }

    #[test]
    fn test_add_snack() {
        let store = CartStore::empty(Arc::new(SnackbarManager::new()));
        let chips = snack(15, "Chips", 299);

        store.add_snack(&chips).unwrap();
        let snap = store.add_snack(&chips).unwrap();

        assert_eq!(snap.quantity_of(chips.id), Some(2));
        assert_eq!(snap.totals.subtotal, Money::from_cents(598));
    }

    #[test]
    fn test_totals_include_shipping_only_when_not_empty() {
        let (store, _) = seeded(Box::new(NeverFail));

        let totals = store.totals();
        assert_eq!(totals.subtotal, Money::from_cents(2 * 499 + 3 * 1299 + 549));
        assert_eq!(totals.shipping, Money::from_cents(369));
        assert_eq!(totals.total, totals.subtotal + Money::from_cents(369));

        for id in [4, 6, 8] {
            store.remove_line(SnackId::new(id));
        }
        assert_eq!(store.totals().total, Money::zero());
    }

    #[tokio::test]
    async fn test_subscribers_see_published_snapshots() {
        let (store, _) = seeded(Box::new(NeverFail));
        let mut rx = store.subscribe();

        store.increase_quantity(SnackId::new(8)).unwrap();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().quantity_of(SnackId::new(8)), Some(2));
    }

    #[test]
    fn test_rejected_call_does_not_notify_subscribers() {
        let (store, _) = seeded(policy_for_cadence(1));
        let rx = store.subscribe();

        assert!(store.increase_quantity(SnackId::new(4)).is_err());
        assert!(!rx.has_changed().unwrap());
    }
}
