//! Rental management service

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::rental::{RentalHistoryEntry, RentalLog},
    repository::Repository,
};

/// Loan period applied to every checkout
const LOAN_PERIOD_DAYS: i64 = 7;

#[derive(Clone)]
pub struct RentalsService {
    repository: Repository,
}

impl RentalsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Check out a book for a user.
    ///
    /// The book must exist and not be soft-deleted; the open-rental check
    /// and the insert are a single conditional statement in the repository,
    /// so the at-most-one-open-rental invariant holds under concurrency.
    pub async fn checkout(&self, user_id: Uuid, isbn: i64) -> AppResult<RentalLog> {
        self.repository.books.get_active(isbn).await?;

        let checkout_date = Utc::now();
        let due_date = checkout_date + Duration::days(LOAN_PERIOD_DAYS);

        self.repository
            .rentals
            .checkout(isbn, user_id, checkout_date, due_date)
            .await
    }

    /// Return a rented book.
    ///
    /// Only the user who opened the rental may close it, and a rental can
    /// be closed only once.
    pub async fn return_rental(&self, rental_id: Uuid, user_id: Uuid) -> AppResult<RentalLog> {
        let rental = self.repository.rentals.get_by_id(rental_id).await?;

        if !rental.is_open() {
            return Err(AppError::Conflict(
                "Rental has already been returned".to_string(),
            ));
        }

        if rental.user_id != user_id {
            return Err(AppError::Authorization(
                "Rental belongs to another user".to_string(),
            ));
        }

        self.repository
            .rentals
            .mark_returned(rental_id, Utc::now())
            .await
    }

    /// Full rental history of a user, newest checkout first
    pub async fn history(&self, user_id: Uuid) -> AppResult<Vec<RentalHistoryEntry>> {
        let rows = self.repository.rentals.history_for_user(user_id).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
