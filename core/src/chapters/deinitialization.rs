//! Cleanup in `Drop`: a player hands every coin back to the bank when it
//! goes away.
//!
//! The bank is the only piece of static state in the tour. It is
//! thread-local, so concurrent test threads each see their own vault.

use std::cell::Cell;

use tour_common::{Result, say};

use crate::context::Context;

pub const INITIAL_COINS: u32 = 10_000;

thread_local! {
    static COINS_IN_BANK: Cell<u32> = const { Cell::new(INITIAL_COINS) }
}

pub struct Bank;

impl Bank {
    pub fn coins_in_bank() -> u32 {
        COINS_IN_BANK.get()
    }

    /// Hands out as many of the requested coins as the bank still has.
    pub fn distribute(requested: u32) -> u32 {
        COINS_IN_BANK.with(|coins| {
            let vended = requested.min(coins.get());
            coins.set(coins.get() - vended);
            vended
        })
    }

    pub fn receive(coins: u32) {
        COINS_IN_BANK.with(|vault| vault.set(vault.get() + coins));
    }
}

#[derive(Debug)]
pub struct BankPlayer {
    coins_in_purse: u32,
}

impl BankPlayer {
    pub fn new(coins: u32) -> Self {
        Self {
            coins_in_purse: Bank::distribute(coins),
        }
    }

    pub fn win(&mut self, coins: u32) {
        self.coins_in_purse += Bank::distribute(coins);
    }

    pub fn coins_in_purse(&self) -> u32 {
        self.coins_in_purse
    }
}

impl Drop for BankPlayer {
    fn drop(&mut self) {
        Bank::receive(self.coins_in_purse);
    }
}

pub fn run(ctx: &mut Context) -> Result<()> {
    let mut player_one = Some(BankPlayer::new(100));
    if let Some(player) = &player_one {
        say!(ctx, "A new player has joined the game with {} coins", player.coins_in_purse());
    }
    say!(ctx, "There are now {} coins left in the bank", Bank::coins_in_bank());

    if let Some(player) = player_one.as_mut() {
        player.win(2_000);
        say!(ctx, "PlayerOne won 2000 coins & now has {} coins", player.coins_in_purse());
    }
    say!(ctx, "The bank now only has {} coins left", Bank::coins_in_bank());

    player_one = None;
    debug_assert!(player_one.is_none());
    say!(ctx, "PlayerOne has left the game");
    say!(ctx, "The bank now has {} coins", Bank::coins_in_bank());

    {
        let _guest = BankPlayer::new(50);
        say!(ctx, "A guest borrows 50 coins, bank has {}", Bank::coins_in_bank());
    }
    say!(ctx, "The guest left at the end of the scope, bank has {}", Bank::coins_in_bank());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropping_a_player_returns_its_coins() {
        let before = Bank::coins_in_bank();
        let mut player = BankPlayer::new(100);
        player.win(2_000);
        assert_eq!(player.coins_in_purse(), 2_100);
        assert_eq!(Bank::coins_in_bank(), before - 2_100);

        drop(player);
        assert_eq!(Bank::coins_in_bank(), before);
    }

    #[test]
    fn distribute_never_overdraws() {
        let before = Bank::coins_in_bank();
        let greedy = BankPlayer::new(before + 500);
        assert_eq!(greedy.coins_in_purse(), before);
        assert_eq!(Bank::coins_in_bank(), 0);
        drop(greedy);
        assert_eq!(Bank::coins_in_bank(), before);
    }

    #[test]
    fn chapter_leaves_the_bank_balanced() {
        let before = Bank::coins_in_bank();
        let mut ctx = Context::new(0);
        run(&mut ctx).unwrap();
        assert_eq!(Bank::coins_in_bank(), before);
        assert!(ctx.transcript().contains("PlayerOne won 2000 coins & now has 2100 coins"));
    }
}
