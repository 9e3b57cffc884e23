//! Utility lookup commands.

use serenity::all::{Context, Message};

use crate::error::{command::CommandError, AppError};
use crate::util::parse::parse_user_mention;

/// `ping` - liveness check.
pub async fn ping(ctx: &Context, message: &Message) -> Result<(), AppError> {
    message.channel_id.say(&ctx.http, "Pong! 💕").await?;
    Ok(())
}

/// `serverinfo` - name, member count and age of the invoking guild.
pub async fn server_info(ctx: &Context, message: &Message) -> Result<(), AppError> {
    let Some(guild_id) = message.guild_id else {
        return Err(CommandError::GuildOnly.into());
    };

    // Cache refs must not be held across an await, so copy the fields out.
    let cached = ctx
        .cache
        .guild(guild_id)
        .map(|guild| (guild.name.clone(), guild.member_count));
    let created = format!("<t:{}:D>", guild_id.created_at().unix_timestamp());

    let line = match cached {
        Some((name, member_count)) => {
            format!("**{}** - {} members, created {}", name, member_count, created)
        }
        None => {
            let guild = ctx.http.get_guild(guild_id).await?;
            format!("**{}** - created {}", guild.name, created)
        }
    };

    message.channel_id.say(&ctx.http, line).await?;
    Ok(())
}

/// `userinfo [@user]` - account details for the target, or the invoker when
/// no target is given.
pub async fn user_info(ctx: &Context, message: &Message, args: &str) -> Result<(), AppError> {
    let user = match args.split_whitespace().next() {
        Some(target) => {
            let user_id = parse_user_mention(target)?;
            ctx.http.get_user(user_id).await?
        }
        None => message.author.clone(),
    };

    let line = format!(
        "**{}** (id {}) - account created <t:{}:D>",
        user.name,
        user.id,
        user.id.created_at().unix_timestamp()
    );
    message.channel_id.say(&ctx.http, line).await?;
    Ok(())
}
