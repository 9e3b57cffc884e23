//! Fun response commands.

use rand::Rng;
use serenity::all::{Context, Message};

use crate::error::{command::CommandError, AppError};

/// Canned 8-ball answers, affirmative to grim.
const EIGHT_BALL_ANSWERS: &[&str] = &[
    "It is certain.",
    "Without a doubt.",
    "Signs point to yes.",
    "Most likely.",
    "Ask again later.",
    "Better not tell you now.",
    "Don't count on it.",
    "My sources say no.",
    "Very doubtful.",
    "Outlook not so good.",
];

/// Upper bounds keeping `roll` output a single message.
const MAX_DICE: u32 = 100;
const MAX_SIDES: u32 = 1000;

/// `8ball <question>` - a random canned answer.
pub async fn eight_ball(ctx: &Context, message: &Message, args: &str) -> Result<(), AppError> {
    if args.is_empty() {
        return Err(CommandError::Usage("8ball <question>").into());
    }

    let answer = {
        let mut rng = rand::rng();
        EIGHT_BALL_ANSWERS[rng.random_range(0..EIGHT_BALL_ANSWERS.len())]
    };

    message
        .channel_id
        .say(&ctx.http, format!("🎱 {}", answer))
        .await?;
    Ok(())
}

/// `roll [NdM]` - rolls N dice with M sides, default 1d6.
pub async fn roll(ctx: &Context, message: &Message, args: &str) -> Result<(), AppError> {
    let notation = if args.is_empty() { "1d6" } else { args };
    let (count, sides) = parse_dice(notation)?;

    let (rolls, total) = {
        let mut rng = rand::rng();
        let mut rolls = Vec::with_capacity(count as usize);
        let mut total: u64 = 0;
        for _ in 0..count {
            let roll = rng.random_range(1..=sides as u64);
            total += roll;
            rolls.push(roll.to_string());
        }
        (rolls, total)
    };

    let line = if count == 1 {
        format!("🎲 {} → {}", notation, total)
    } else {
        format!("🎲 {} → {} ({})", notation, total, rolls.join(" + "))
    };
    message.channel_id.say(&ctx.http, line).await?;
    Ok(())
}

/// `coinflip` - heads or tails.
pub async fn coin_flip(ctx: &Context, message: &Message) -> Result<(), AppError> {
    let side = {
        let mut rng = rand::rng();
        if rng.random_range(0..2) == 0 {
            "Heads"
        } else {
            "Tails"
        }
    };

    message
        .channel_id
        .say(&ctx.http, format!("🪙 {}!", side))
        .await?;
    Ok(())
}

/// Parses `NdM` dice notation within the output bounds.
fn parse_dice(notation: &str) -> Result<(u32, u32), AppError> {
    const USAGE: &str = "roll [NdM], e.g. roll 2d20";

    let (count_raw, sides_raw) = notation
        .split_once(['d', 'D'])
        .ok_or(CommandError::Usage(USAGE))?;
    let count: u32 = count_raw.parse().map_err(|_| CommandError::Usage(USAGE))?;
    let sides: u32 = sides_raw.parse().map_err(|_| CommandError::Usage(USAGE))?;

    if count == 0 || sides == 0 || count > MAX_DICE || sides > MAX_SIDES {
        return Err(CommandError::Usage(USAGE).into());
    }
    Ok((count, sides))
}
