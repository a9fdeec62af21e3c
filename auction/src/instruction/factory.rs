use super::{Address, AuctionInstruction, Instruction};
use crate::assertions::ValidatedAuction;
use crate::state::UnixTimestamp;
use crate::ValidationError;

use borsh::BorshSerialize;

pub struct CreateAuctionArgs {
    pub auction_manager: Address,
    pub nft_contract: Address,
    pub auction: ValidatedAuction,
    pub start_timestamp: UnixTimestamp,
}

pub fn create_auction(args: &CreateAuctionArgs) -> Result<Instruction, ValidationError> {
    let instruction = AuctionInstruction::CreateAuction {
        nft_contract: args.nft_contract,
        token_id: args.auction.token_id,
        start_price: args.auction.start_price,
        min_increment: args.auction.min_increment,
        direct_buy_price: args.auction.direct_buy_price,
        end_time: args.auction.end_timestamp(args.start_timestamp)?,
    };

    // unwrap is fine because instruction is serializable
    let data = instruction.try_to_vec().unwrap();
    Ok(Instruction {
        contract: args.auction_manager,
        data,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use borsh::BorshDeserialize;

    #[test]
    fn create_auction_payload() {
        let args = CreateAuctionArgs {
            auction_manager: [2; 20],
            nft_contract: [1; 20],
            auction: ValidatedAuction {
                start_price: 100,
                token_id: 3,
                min_increment: 5,
                direct_buy_price: 500,
                duration_minutes: 60,
            },
            start_timestamp: 1_000,
        };
        let instruction = create_auction(&args).unwrap();
        assert_eq!(instruction.contract, [2; 20]);
        let decoded = AuctionInstruction::try_from_slice(&instruction.data).unwrap();
        assert_eq!(
            decoded,
            AuctionInstruction::CreateAuction {
                nft_contract: [1; 20],
                token_id: 3,
                start_price: 100,
                min_increment: 5,
                direct_buy_price: 500,
                end_time: 4_600,
            }
        );
    }
}
