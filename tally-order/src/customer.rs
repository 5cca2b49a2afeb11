use crate::cart::Cart;
use rust_decimal::Decimal;
use uuid::Uuid;

/// A shopper with a spending balance and their cart
#[derive(Debug, Clone)]
pub struct Customer {
    id: Uuid,
    name: String,
    balance: Decimal,
    cart: Cart,
}

impl Customer {
    pub fn new(name: impl Into<String>, balance: Decimal) -> Result<Self, CustomerError> {
        if balance < Decimal::ZERO {
            return Err(CustomerError::InvalidAmount(balance));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            balance,
            cart: Cart::new(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Top up the balance
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), CustomerError> {
        if amount <= Decimal::ZERO {
            return Err(CustomerError::InvalidAmount(amount));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(CustomerError::InvalidAmount(amount))?;
        Ok(())
    }

    /// Direct balance override; unlike `debit` this may go negative
    pub fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }

    /// Guarded deduction: never takes the balance below zero
    pub fn debit(&mut self, amount: Decimal) -> Result<Decimal, CustomerError> {
        if amount < Decimal::ZERO {
            return Err(CustomerError::InvalidAmount(amount));
        }
        if self.balance < amount {
            return Err(CustomerError::InsufficientFunds {
                required: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        Ok(self.balance)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),

    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds {
        required: Decimal,
        available: Decimal,
    },
}
