//! Lens API v1 operation documents.
//!
//! The documents are embedded as constants; their schemas are an external
//! contract the SDK consumes as-is. Union results always select `__typename`
//! so wire enums can discriminate on it.

/// Whether an operation mutates server state.
///
/// Queries are safe to retry; mutations are submitted exactly once and any
/// failure propagates to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

/// A named GraphQL operation with its document text.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    pub name: &'static str,
    pub kind: OperationKind,
    pub document: &'static str,
}

pub const CHALLENGE: Operation = Operation {
    name: "Challenge",
    kind: OperationKind::Query,
    document: r#"query Challenge($request: ChallengeRequest!) {
  challenge(request: $request) {
    text
  }
}"#,
};

pub const AUTHENTICATE: Operation = Operation {
    name: "Authenticate",
    kind: OperationKind::Mutation,
    document: r#"mutation Authenticate($request: SignedAuthChallenge!) {
  authenticate(request: $request) {
    accessToken
    refreshToken
  }
}"#,
};

pub const REFRESH: Operation = Operation {
    name: "Refresh",
    kind: OperationKind::Mutation,
    document: r#"mutation Refresh($request: RefreshRequest!) {
  refresh(request: $request) {
    accessToken
    refreshToken
  }
}"#,
};

pub const PROFILE: Operation = Operation {
    name: "Profile",
    kind: OperationKind::Query,
    document: r#"query Profile($request: SingleProfileQueryRequest!) {
  profile(request: $request) {
    id
    handle
    name
    bio
    ownedBy
    isDefault
    metadata
    dispatcher {
      address
      canUseRelay
    }
  }
}"#,
};

pub const PROFILES: Operation = Operation {
    name: "Profiles",
    kind: OperationKind::Query,
    document: r#"query Profiles($request: ProfileQueryRequest!) {
  profiles(request: $request) {
    items {
      id
      handle
      name
      bio
      ownedBy
      isDefault
      metadata
      dispatcher {
        address
        canUseRelay
      }
    }
    pageInfo {
      prev
      next
      totalCount
    }
  }
}"#,
};

pub const DEFAULT_PROFILE: Operation = Operation {
    name: "DefaultProfile",
    kind: OperationKind::Query,
    document: r#"query DefaultProfile($request: DefaultProfileRequest!) {
  defaultProfile(request: $request) {
    id
    handle
    name
    bio
    ownedBy
    isDefault
    metadata
    dispatcher {
      address
      canUseRelay
    }
  }
}"#,
};

pub const CREATE_PROFILE: Operation = Operation {
    name: "CreateProfile",
    kind: OperationKind::Mutation,
    document: r#"mutation CreateProfile($request: CreateProfileRequest!) {
  createProfile(request: $request) {
    __typename
    ... on RelayerResult {
      txHash
      txId
    }
    ... on RelayError {
      reason
    }
  }
}"#,
};

pub const NFT_OWNERSHIP_CHALLENGE: Operation = Operation {
    name: "NftOwnershipChallenge",
    kind: OperationKind::Query,
    document: r#"query NftOwnershipChallenge($request: NftOwnershipChallengeRequest!) {
  nftOwnershipChallenge(request: $request) {
    id
    text
    timeout
  }
}"#,
};

pub const NFTS: Operation = Operation {
    name: "Nfts",
    kind: OperationKind::Query,
    document: r#"query Nfts($request: NFTsRequest!) {
  nfts(request: $request) {
    items {
      contractName
      contractAddress
      symbol
      tokenId
      name
      description
      collectionName
      chainId
      contentURI
    }
    pageInfo {
      prev
      next
      totalCount
    }
  }
}"#,
};

pub const CREATE_SET_PROFILE_METADATA_VIA_DISPATCHER: Operation = Operation {
    name: "CreateSetProfileMetadataViaDispatcher",
    kind: OperationKind::Mutation,
    document: r#"mutation CreateSetProfileMetadataViaDispatcher($request: CreatePublicSetProfileMetadataURIRequest!) {
  createSetProfileMetadataViaDispatcher(request: $request) {
    __typename
    ... on RelayerResult {
      txHash
      txId
    }
    ... on RelayError {
      reason
    }
  }
}"#,
};

pub const CREATE_SET_PROFILE_METADATA_TYPED_DATA: Operation = Operation {
    name: "CreateSetProfileMetadataTypedData",
    kind: OperationKind::Mutation,
    document: r#"mutation CreateSetProfileMetadataTypedData($request: CreatePublicSetProfileMetadataURIRequest!) {
  createSetProfileMetadataTypedData(request: $request) {
    id
    expiresAt
    typedData {
      types {
        SetProfileMetadataURIWithSig {
          name
          type
        }
      }
      domain {
        name
        chainId
        version
        verifyingContract
      }
      value {
        nonce
        deadline
        profileId
        metadata
      }
    }
  }
}"#,
};

pub const CREATE_SET_PROFILE_IMAGE_URI_TYPED_DATA: Operation = Operation {
    name: "CreateSetProfileImageUriTypedData",
    kind: OperationKind::Mutation,
    document: r#"mutation CreateSetProfileImageUriTypedData($request: UpdateProfileImageRequest!) {
  createSetProfileImageURITypedData(request: $request) {
    id
    expiresAt
    typedData {
      types {
        SetProfileImageURIWithSig {
          name
          type
        }
      }
      domain {
        name
        chainId
        version
        verifyingContract
      }
      value {
        nonce
        deadline
        imageURI
        profileId
      }
    }
  }
}"#,
};

pub const BROADCAST: Operation = Operation {
    name: "Broadcast",
    kind: OperationKind::Mutation,
    document: r#"mutation Broadcast($request: BroadcastRequest!) {
  broadcast(request: $request) {
    __typename
    ... on RelayerResult {
      txHash
      txId
    }
    ... on RelayError {
      reason
    }
  }
}"#,
};

pub const HAS_TX_HASH_BEEN_INDEXED: Operation = Operation {
    name: "HasTxHashBeenIndexed",
    kind: OperationKind::Query,
    document: r#"query HasTxHashBeenIndexed($request: HasTxHashBeenIndexedRequest!) {
  hasTxHashBeenIndexed(request: $request) {
    __typename
    ... on TransactionIndexedResult {
      indexed
      txHash
      txReceipt {
        transactionHash
        blockNumber
        status
        logs {
          address
          topics
          data
        }
      }
      metadataStatus {
        status
        reason
      }
    }
    ... on TransactionError {
      reason
    }
  }
}"#,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_documents_select_typename() {
        for op in [
            CREATE_PROFILE,
            CREATE_SET_PROFILE_METADATA_VIA_DISPATCHER,
            BROADCAST,
            HAS_TX_HASH_BEEN_INDEXED,
        ] {
            assert!(
                op.document.contains("__typename"),
                "{} must select __typename for union discrimination",
                op.name
            );
        }
    }

    #[test]
    fn test_queries_and_mutations_are_classified() {
        assert_eq!(CHALLENGE.kind, OperationKind::Query);
        assert_eq!(HAS_TX_HASH_BEEN_INDEXED.kind, OperationKind::Query);
        assert_eq!(AUTHENTICATE.kind, OperationKind::Mutation);
        assert_eq!(BROADCAST.kind, OperationKind::Mutation);
        assert_eq!(
            CREATE_SET_PROFILE_METADATA_VIA_DISPATCHER.kind,
            OperationKind::Mutation
        );
    }
}
