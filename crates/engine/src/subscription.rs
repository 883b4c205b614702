// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscriber handle for a watched tape

use crate::registry::DeliveryReceiver;
use lc_core::{Delivery, Target};

/// One subscriber's end of a watcher's delivery stream.
///
/// Deliveries arrive in tape append order. `recv` returning `None` means
/// the watcher has stopped (its tape became unreadable) and no further
/// deliveries will arrive; the failure itself is reported on the
/// operator channel, not here.
pub struct Subscription {
    target: Target,
    receiver: DeliveryReceiver,
}

impl Subscription {
    pub(crate) fn new(target: Target, receiver: DeliveryReceiver) -> Self {
        Self { target, receiver }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Wait for the next delivery; `None` once the watcher is gone
    pub async fn recv(&mut self) -> Option<Delivery> {
        self.receiver.recv().await
    }

    /// Take a delivery if one is already queued
    pub fn try_recv(&mut self) -> Option<Delivery> {
        self.receiver.try_recv().ok()
    }
}
