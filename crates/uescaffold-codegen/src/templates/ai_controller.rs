//! AEnemyAIController — sight-based perception with chase/search behavior.

use crate::config::ScaffoldConfig;

use super::render;

const HEADER: &str = r##"
#pragma once

#include "CoreMinimal.h"
#include "AIController.h"
#include "EnemyAIController.generated.h"

class UAIPerceptionComponent;
class UAISenseConfig_Sight;

UCLASS()
class {{module_api}} AEnemyAIController : public AAIController
{
    GENERATED_BODY()

public:
    AEnemyAIController();

protected:
    virtual void OnPossess(APawn* InPawn) override;

    UFUNCTION()
    void HandleTargetPerceptionUpdated(AActor* Actor, FAIStimulus Stimulus);

    void BeginSearch();
    void SearchTick();

    UPROPERTY(VisibleAnywhere, BlueprintReadOnly, Category = "AI")
    UAIPerceptionComponent* PerceptionComponent;

    UPROPERTY()
    UAISenseConfig_Sight* SightConfig;

    UPROPERTY()
    FTimerHandle SearchTimerHandle;

    UPROPERTY(EditDefaultsOnly, Category = "AI")
    float SearchDuration;
};
"##;

const SOURCE: &str = r##"
#include "AI/EnemyAIController.h"

#include "Perception/AIPerceptionComponent.h"
#include "Perception/AISenseConfig_Sight.h"
#include "Perception/AISense_Sight.h"
#include "Kismet/GameplayStatics.h"

AEnemyAIController::AEnemyAIController()
{
    PerceptionComponent = CreateDefaultSubobject<UAIPerceptionComponent>(TEXT("PerceptionComponent"));
    SetPerceptionComponent(*PerceptionComponent);

    SightConfig = CreateDefaultSubobject<UAISenseConfig_Sight>(TEXT("SightConfig"));
    SightConfig->SightRadius = 900.0f;
    SightConfig->LoseSightRadius = 1200.0f;
    SightConfig->PeripheralVisionAngleDegrees = 75.0f;
    SightConfig->SetMaxAge(5.0f);
    SightConfig->DetectionByAffiliation.bDetectEnemies = true;
    SightConfig->DetectionByAffiliation.bDetectFriendlies = true;
    SightConfig->DetectionByAffiliation.bDetectNeutrals = true;

    PerceptionComponent->ConfigureSense(*SightConfig);
    PerceptionComponent->SetDominantSense(SightConfig->GetSenseImplementation());
    PerceptionComponent->OnTargetPerceptionUpdated.AddDynamic(this, &AEnemyAIController::HandleTargetPerceptionUpdated);

    SearchDuration = 60.0f;
}

void AEnemyAIController::OnPossess(APawn* InPawn)
{
    Super::OnPossess(InPawn);
    UE_LOG(LogTemp, Log, TEXT("EnemyAIController possessed %s"), *GetNameSafe(InPawn));
}

void AEnemyAIController::HandleTargetPerceptionUpdated(AActor* Actor, FAIStimulus Stimulus)
{
    if (!Actor)
    {
        return;
    }

    if (Stimulus.WasSuccessfullySensed())
    {
        UE_LOG(LogTemp, Log, TEXT("Player seen: %s"), *Actor->GetName());
        MoveToActor(Actor, 75.0f);
        GetWorld()->GetTimerManager().ClearTimer(SearchTimerHandle);
    }
    else
    {
        UE_LOG(LogTemp, Log, TEXT("Player lost: %s"), *Actor->GetName());
        BeginSearch();
    }
}

void AEnemyAIController::BeginSearch()
{
    GetWorld()->GetTimerManager().SetTimer(SearchTimerHandle, this, &AEnemyAIController::SearchTick, 2.5f, true);
    GetWorld()->GetTimerManager().SetTimerForNextTick([this]()
    {
        SearchTick();
    });
}

void AEnemyAIController::SearchTick()
{
    if (!GetPawn())
    {
        return;
    }

    const FVector Origin = GetPawn()->GetActorLocation();
    const FVector RandomPoint = Origin + FMath::VRand() * 600.0f;
    MoveToLocation(RandomPoint);

    const float Elapsed = GetWorld()->GetTimerManager().GetTimerElapsed(SearchTimerHandle);
    if (Elapsed > SearchDuration)
    {
        GetWorld()->GetTimerManager().ClearTimer(SearchTimerHandle);
    }
}
"##;

pub fn header(config: &ScaffoldConfig) -> String {
    render(HEADER, config)
}

pub fn source(config: &ScaffoldConfig) -> String {
    render(SOURCE, config)
}
