//! AAgentKaiCharacter — the playable hero with grab-and-attach collection.

use crate::config::ScaffoldConfig;

use super::render;

const HEADER: &str = r##"
#pragma once

#include "CoreMinimal.h"
#include "GameFramework/Character.h"
#include "AgentKaiCharacter.generated.h"

class USpringArmComponent;
class UCameraComponent;
class ACollectibleItem;

UCLASS()
class {{module_api}} AAgentKaiCharacter : public ACharacter
{
    GENERATED_BODY()

public:
    AAgentKaiCharacter();

    virtual void Tick(float DeltaTime) override;
    virtual void SetupPlayerInputComponent(class UInputComponent* PlayerInputComponent) override;

protected:
    virtual void BeginPlay() override;

    void MoveForward(float Value);
    void MoveRight(float Value);
    void TestLogAction();
    void StartGrab();
    void TryCollectItem();

    UPROPERTY(VisibleAnywhere, BlueprintReadOnly, Category = "Camera")
    USpringArmComponent* CameraBoom;

    UPROPERTY(VisibleAnywhere, BlueprintReadOnly, Category = "Camera")
    UCameraComponent* FollowCamera;

    UPROPERTY(EditDefaultsOnly, Category = "Collecting")
    float GrabDistance;

    UPROPERTY(EditDefaultsOnly, Category = "Collecting")
    float GrabRadius;

};
"##;

const SOURCE: &str = r##"
#include "Characters/AgentKaiCharacter.h"

#include "Camera/CameraComponent.h"
#include "Collectibles/CollectibleItem.h"
#include "GameFramework/SpringArmComponent.h"
#include "Kismet/KismetSystemLibrary.h"
#include "DrawDebugHelpers.h"

AAgentKaiCharacter::AAgentKaiCharacter()
{
    PrimaryActorTick.bCanEverTick = true;

    CameraBoom = CreateDefaultSubobject<USpringArmComponent>(TEXT("CameraBoom"));
    CameraBoom->SetupAttachment(RootComponent);
    CameraBoom->TargetArmLength = 300.0f;
    CameraBoom->bUsePawnControlRotation = true;

    FollowCamera = CreateDefaultSubobject<UCameraComponent>(TEXT("FollowCamera"));
    FollowCamera->SetupAttachment(CameraBoom, USpringArmComponent::SocketName);
    FollowCamera->bUsePawnControlRotation = false;

    GrabDistance = 250.0f;
    GrabRadius = 60.0f;
}

void AAgentKaiCharacter::BeginPlay()
{
    Super::BeginPlay();
    UE_LOG(LogTemp, Log, TEXT("AgentKai ready for collection tests."));
}

void AAgentKaiCharacter::Tick(float DeltaTime)
{
    Super::Tick(DeltaTime);
}

void AAgentKaiCharacter::SetupPlayerInputComponent(UInputComponent* PlayerInputComponent)
{
    Super::SetupPlayerInputComponent(PlayerInputComponent);
    check(PlayerInputComponent);

    PlayerInputComponent->BindAxis("MoveForward", this, &AAgentKaiCharacter::MoveForward);
    PlayerInputComponent->BindAxis("MoveRight", this, &AAgentKaiCharacter::MoveRight);
    PlayerInputComponent->BindAction("Jump", IE_Pressed, this, &ACharacter::Jump);
    PlayerInputComponent->BindAction("Jump", IE_Released, this, &ACharacter::StopJumping);
    PlayerInputComponent->BindAction("TestLog", IE_Pressed, this, &AAgentKaiCharacter::TestLogAction);
    PlayerInputComponent->BindAction("Grab", IE_Pressed, this, &AAgentKaiCharacter::StartGrab);
}

void AAgentKaiCharacter::MoveForward(float Value)
{
    if (Controller && FMath::Abs(Value) > KINDA_SMALL_NUMBER)
    {
        const FRotator ControlRotation = Controller->GetControlRotation();
        const FRotator YawRotation(0.f, ControlRotation.Yaw, 0.f);

        const FVector Direction = FRotationMatrix(YawRotation).GetUnitAxis(EAxis::X);
        AddMovementInput(Direction, Value);
    }
}

void AAgentKaiCharacter::MoveRight(float Value)
{
    if (Controller && FMath::Abs(Value) > KINDA_SMALL_NUMBER)
    {
        const FRotator ControlRotation = Controller->GetControlRotation();
        const FRotator YawRotation(0.f, ControlRotation.Yaw, 0.f);

        const FVector Direction = FRotationMatrix(YawRotation).GetUnitAxis(EAxis::Y);
        AddMovementInput(Direction, Value);
    }
}

void AAgentKaiCharacter::TestLogAction()
{
    UE_LOG(LogTemp, Log, TEXT("TestLog action pressed — input mapping confirmed."));
}

void AAgentKaiCharacter::StartGrab()
{
    TryCollectItem();
}

void AAgentKaiCharacter::TryCollectItem()
{
    const FVector Start = FollowCamera->GetComponentLocation();
    const FVector End = Start + FollowCamera->GetForwardVector() * GrabDistance;

    FHitResult HitResult;
    const bool bHit = UKismetSystemLibrary::SphereTraceSingle(
        GetWorld(),
        Start,
        End,
        GrabRadius,
        UEngineTypes::ConvertToTraceType(ECC_Visibility),
        false,
        { this },
        EDrawDebugTrace::ForDuration,
        HitResult,
        true);

    if (bHit)
    {
        UE_LOG(LogTemp, Log, TEXT("Grab trace hit: %s"), *GetNameSafe(HitResult.GetActor()));
    }
    else
    {
        UE_LOG(LogTemp, Verbose, TEXT("Grab trace found nothing."));
    }
}
"##;

pub fn header(config: &ScaffoldConfig) -> String {
    render(HEADER, config)
}

pub fn source(config: &ScaffoldConfig) -> String {
    render(SOURCE, config)
}
