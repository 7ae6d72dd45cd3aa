//! Ticket issuance and lookup.

use crate::engine::CatalogEngine;
use crate::error::{CatalogError, Result};
use crate::notify::TicketNotification;
use crate::providers::TicketCodeEncoder;
use crate::store::CatalogStore;
use crate::types::{CodePayload, GameId, Ticket, TicketId, UserId};
use tracing::{info, warn};

/// Result of a successful ticket issuance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedTicket {
    /// The persisted ticket, code payload attached.
    pub ticket: Ticket,
    /// The scannable payload, also returned separately so callers can render
    /// it without digging into the ticket.
    pub qrcode: CodePayload,
}

impl<S, C> CatalogEngine<S, C>
where
    S: CatalogStore,
    C: TicketCodeEncoder,
{
    /// Issue a ticket for a game to a buyer.
    ///
    /// The ticket is persisted and registered on the buyer before any code
    /// generation happens, so a later failure leaves a valid (if codeless)
    /// ticket behind rather than losing the purchase. Notification delivery
    /// runs on the background queue and cannot fail this call.
    ///
    /// # Errors
    ///
    /// Returns `GameNotFound` or `UserNotFound` if either party is missing,
    /// `Encoding` if code generation fails after persistence, or `Store` on
    /// persistence failure.
    pub async fn issue_ticket(
        &self,
        buyer: UserId,
        game_id: GameId,
        date: impl Into<String>,
    ) -> Result<IssuedTicket> {
        if self.store.get_game(game_id).await?.is_none() {
            return Err(CatalogError::GameNotFound(game_id));
        }
        let user = self
            .store
            .get_user(buyer)
            .await?
            .ok_or(CatalogError::UserNotFound(buyer))?;

        let mut ticket = Ticket::new(game_id, buyer, date, self.clock.now());
        self.store.insert_ticket(ticket.clone()).await?;
        if !self.store.register_ticket(buyer, ticket.id).await? {
            return Err(CatalogError::UserNotFound(buyer));
        }
        info!(ticket_id = %ticket.id, game_id = %game_id, buyer = %buyer, "ticket persisted");

        let ticket_url = self.config.ticket_url(ticket.id);
        let qrcode = match self.encoder.encode(&ticket_url) {
            Ok(payload) => payload,
            Err(error) => {
                warn!(ticket_id = %ticket.id, %error, "code generation failed; ticket kept");
                return Err(error);
            }
        };

        if !self.store.set_ticket_code(ticket.id, qrcode.clone()).await? {
            return Err(CatalogError::TicketNotFound(ticket.id));
        }
        ticket.qrcode = Some(qrcode.clone());

        self.notifications.enqueue(TicketNotification {
            to: user.email,
            ticket_id: ticket.id,
            ticket_url,
            qrcode: qrcode.clone(),
        });

        info!(ticket_id = %ticket.id, "ticket issued");
        Ok(IssuedTicket { ticket, qrcode })
    }

    /// Fetch a ticket.
    ///
    /// # Errors
    ///
    /// Returns `TicketNotFound` if absent, or `Store` on read failure.
    pub async fn get_ticket(&self, id: TicketId) -> Result<Ticket> {
        self.store
            .get_ticket(id)
            .await?
            .ok_or(CatalogError::TicketNotFound(id))
    }
}
