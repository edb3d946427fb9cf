//! AEnemyAICharacter — pursuer pawn configured for AI control.

use crate::config::ScaffoldConfig;

use super::render;

const HEADER: &str = r##"
#pragma once

#include "CoreMinimal.h"
#include "GameFramework/Character.h"
#include "EnemyAICharacter.generated.h"

UCLASS()
class {{module_api}} AEnemyAICharacter : public ACharacter
{
    GENERATED_BODY()

public:
    AEnemyAICharacter();
};
"##;

const SOURCE: &str = r##"
#include "Characters/EnemyAICharacter.h"

AEnemyAICharacter::AEnemyAICharacter()
{
    PrimaryActorTick.bCanEverTick = false;
    AutoPossessAI = EAutoPossessAI::PlacedInWorldOrSpawned;
}
"##;

pub fn header(config: &ScaffoldConfig) -> String {
    render(HEADER, config)
}

pub fn source(config: &ScaffoldConfig) -> String {
    render(SOURCE, config)
}
