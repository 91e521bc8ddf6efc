mod create;
mod delete;
pub mod fields;
mod get;
mod list;
mod publish;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::QuizCommands;
use crate::context::AppContext;

/// Handle `kambaz quiz`.
pub async fn handle(
    action: &QuizCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        QuizCommands::List => list::run(ctx, flags).await,
        QuizCommands::Get { id } => get::run(id, ctx, flags).await,
        QuizCommands::Create { fields, publish } => {
            create::run(fields, *publish, ctx, flags).await
        }
        QuizCommands::Update {
            id,
            fields,
            publish,
        } => update::run(id, fields, *publish, ctx, flags).await,
        QuizCommands::Delete { id } => delete::run(id, ctx, flags).await,
        QuizCommands::Publish { id } => publish::run(id, true, ctx, flags).await,
        QuizCommands::Unpublish { id } => publish::run(id, false, ctx, flags).await,
    }
}
