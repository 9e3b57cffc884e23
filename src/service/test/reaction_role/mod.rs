use serenity::all::{ChannelId, GuildId, MessageId, ReactionType, RoleId, UserId};

use crate::data::ReactionRoleTable;
use crate::error::{command::CommandError, AppError};
use crate::service::test::support::RecordingGateway;
use crate::service::ReactionRoleService;

mod bind;
mod reaction_added;

const GUILD: GuildId = GuildId::new(900);
const CHANNEL: ChannelId = ChannelId::new(500);
const MESSAGE: MessageId = MessageId::new(42);
const BOT: UserId = UserId::new(1);
const MEMBER: UserId = UserId::new(77);

fn thumbs_up() -> ReactionType {
    ReactionType::Unicode("👍".to_string())
}
